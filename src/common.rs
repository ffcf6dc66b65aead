use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    handlebars_helper!(count: |v: Value| v.as_array().map(|items| items.len()).unwrap_or(0));
    handlebars.register_helper("count", Box::new(count));

    handlebars
}

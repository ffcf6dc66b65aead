use axum::{http::StatusCode, response::Html};
use serde_json::json;
use tracing::error;

use crate::common::get_handlebars;

pub async fn register() -> Result<Html<String>, StatusCode> {
    render_form("Register", "/accounts/register")
}

pub async fn user_login() -> Result<Html<String>, StatusCode> {
    render_form("Log in", "/accounts/user_login")
}

fn render_form(title: &str, action: &str) -> Result<Html<String>, StatusCode> {
    let handlebars = get_handlebars();
    let page = handlebars
        .render_template(
            &get_template(),
            &json!({ "title": title, "action": action }),
        )
        .map_err(|err| {
            error!("Failed to render account template: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Html(page))
}

fn get_template() -> String {
    let template = r##"<!DOCTYPE html>
<html>
  <head>
    <title>{{title}}</title>
  </head>
  <body>
    <h1>{{title}}</h1>
    <form method="post" action="{{action}}">
      <label for="username">Username</label>
      <input type="text" id="username" name="username" />
      <label for="password">Password</label>
      <input type="password" id="password" name="password" />
      <button type="submit">{{title}}</button>
    </form>
  </body>
</html>
"##;

    template.to_string()
}

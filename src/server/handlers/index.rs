use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use sea_orm::{EntityTrait, QueryOrder};
use serde_json::{json, Value};
use tracing::error;

use crate::common::get_handlebars;
use crate::database::entities::{access_records, webpages};
use crate::server::app::AppState;

/// Render every access record, oldest first, with its owning webpage.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let records = fetch_access_records(&state).await?;

    let handlebars = get_handlebars();
    let page = handlebars
        .render_template(
            &get_template(),
            &json!({ "access_records": records_context(&records) }),
        )
        .map_err(|err| {
            error!("Failed to render index template: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Html(page))
}

pub async fn list_access_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    let records = fetch_access_records(&state).await?;

    Ok(Json(records_context(&records)))
}

async fn fetch_access_records(
    state: &AppState,
) -> Result<Vec<(access_records::Model, Option<webpages::Model>)>, StatusCode> {
    access_records::Entity::find()
        .find_also_related(webpages::Entity)
        .order_by_asc(access_records::Column::Date)
        .all(&state.db)
        .await
        .map_err(|err| {
            error!("Database error listing access records: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

fn records_context(records: &[(access_records::Model, Option<webpages::Model>)]) -> Vec<Value> {
    records
        .iter()
        .map(|(record, webpage)| {
            json!({
                "id": record.id,
                "date": record.date,
                "webpage": webpage.as_ref().map(|page| json!({
                    "name": page.name,
                    "url": page.url,
                })),
            })
        })
        .collect()
}

fn get_template() -> String {
    let template = r##"<!DOCTYPE html>
<html>
  <head>
    <title>Access Records</title>
  </head>
  <body>
    <h1>Access Records</h1>
    <p>{{count access_records}} records</p>
    {{#if access_records}}
    <table>
      <tr><th>Webpage</th><th>URL</th><th>Date</th></tr>
      {{#each access_records as |record|}}
      <tr>
        <td>{{record.webpage.name}}</td>
        <td>{{record.webpage.url}}</td>
        <td>{{record.date}}</td>
      </tr>
      {{/each}}
    </table>
    {{else}}
    <p>No access records yet.</p>
    {{/if}}
  </body>
</html>
"##;

    template.to_string()
}

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use anyhow::Result;

use super::handlers::{accounts, health, index};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState { db };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        // Index view
        .route("/", get(index::index))

        // Health check endpoint
        .route("/health", get(health::health_check))

        // Account pages
        .nest("/accounts", account_routes())

        // API v1 routes
        .nest("/api/v1", api_v1_routes())

        // Add middleware
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(accounts::register))
        .route("/user_login", get(accounts::user_login))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new().route("/access-records", get(index::list_access_records))
}

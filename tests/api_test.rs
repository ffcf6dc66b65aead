//! API integration tests
//!
//! Tests for the index view, account pages, and the JSON listing

use anyhow::Result;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::NaiveDate;
use pagetrack::database::connection::setup_database;
use pagetrack::database::seed_data::{
    find_or_create_access_record, find_or_create_topic, find_or_create_webpage,
};
use pagetrack::server::app::create_app;
use sea_orm::{Database, DatabaseConnection};
use serde_json::Value;
use tempfile::NamedTempFile;

/// Create a test server backed by a throwaway sqlite file
async fn setup_test_server() -> Result<(TestServer, DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    let app = create_app(db.clone(), Some("*")).await?;
    let server = TestServer::new(app)?;

    Ok((server, db, temp_file))
}

/// Insert three access records with ascending dates, in shuffled insert order
async fn seed_three_records(db: &DatabaseConnection) -> Result<()> {
    let topic = find_or_create_topic(db, "News").await?;

    let daily = find_or_create_webpage(db, topic.id, "https://www.daily.com/", "Daily Corp").await?;
    let herald =
        find_or_create_webpage(db, topic.id, "https://www.herald.net/", "Herald Group").await?;

    find_or_create_access_record(db, daily.id, NaiveDate::from_ymd_opt(2016, 9, 14).unwrap())
        .await?;
    find_or_create_access_record(db, herald.id, NaiveDate::from_ymd_opt(2014, 1, 3).unwrap())
        .await?;
    find_or_create_access_record(db, daily.id, NaiveDate::from_ymd_opt(2015, 6, 30).unwrap())
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "pagetrack");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_index_page_with_no_records() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Access Records"));
    assert!(html.contains("No access records yet."));

    Ok(())
}

#[tokio::test]
async fn test_index_page_orders_records_by_date() -> Result<()> {
    let (server, db, _temp_file) = setup_test_server().await?;
    seed_three_records(&db).await?;

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains("3 records"));
    assert!(html.contains("Daily Corp"));
    assert!(html.contains("Herald Group"));

    // The rows appear in ascending date order regardless of insert order
    let first = html.find("2014-01-03").expect("oldest date rendered");
    let second = html.find("2015-06-30").expect("middle date rendered");
    let third = html.find("2016-09-14").expect("newest date rendered");
    assert!(first < second);
    assert!(second < third);

    Ok(())
}

#[tokio::test]
async fn test_access_records_api_sorted_ascending() -> Result<()> {
    let (server, db, _temp_file) = setup_test_server().await?;
    seed_three_records(&db).await?;

    let response = server.get("/api/v1/access-records").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let records: Vec<Value> = response.json();
    assert_eq!(records.len(), 3);

    let dates: Vec<&str> = records
        .iter()
        .map(|record| record["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2014-01-03", "2015-06-30", "2016-09-14"]);

    assert_eq!(records[0]["webpage"]["name"], "Herald Group");
    assert_eq!(records[0]["webpage"]["url"], "https://www.herald.net/");

    Ok(())
}

#[tokio::test]
async fn test_account_pages_render() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;

    let response = server.get("/accounts/register").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("<form"));
    assert!(html.contains("Register"));

    let response = server.get("/accounts/user_login").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("<form"));
    assert!(html.contains("Log in"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;

    let response = server.get("/api/v1/webpages").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_cors_headers() -> Result<()> {
    let (server, _db, _temp_file) = setup_test_server().await?;

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:3001"),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let headers = response.headers();
    assert!(headers.get("access-control-allow-origin").is_some());

    Ok(())
}

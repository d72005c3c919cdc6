//! End-to-end review flows through the real services and repositories,
//! backed by a mock MySQL connection.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use serde_json::json;
use tower::ServiceExt;

use review_api::api::{create_router, AppState};
use review_api::config::Config;
use review_api::infra::Database;
use review_api::utils::encode_cursor;

type Row = BTreeMap<&'static str, Value>;

fn row(id: i64) -> Row {
    let updated_at = NaiveDate::from_ymd_opt(2024, 3, 4)
        .unwrap()
        .and_hms_opt(5, 6, 7)
        .unwrap();

    BTreeMap::from([
        ("id", Value::from(id)),
        ("meeting_id", 1i64.into()),
        ("user_id", "u1".into()),
        ("title", format!("title {}", id).into()),
        ("content", "c".into()),
        ("updated_at", updated_at.into()),
    ])
}

fn app(database: MockDatabase) -> Router {
    let database = Arc::new(Database::new(database.into_connection()));
    create_router(AppState::from_config(database, &Config::default()))
}

async fn call(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |json| Body::from(json.to_string())))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn create_review_returns_generated_id() {
    let database = MockDatabase::new(DatabaseBackend::MySql).append_exec_results([MockExecResult {
        last_insert_id: 17,
        rows_affected: 1,
    }]);
    let payload = json!({
        "meetingId": 1,
        "userId": "u1",
        "title": "Great meetup",
        "content": "Would join again."
    });

    let (status, body) = call(app(database), Method::POST, "/reviews", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 17);
}

#[tokio::test]
async fn deleted_or_unknown_review_reads_as_empty_result() {
    let database = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<Row>::new()]);

    let (status, body) = call(app(database), Method::GET, "/reviews/5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Error"].as_str().unwrap().starts_with("Database exception"));
}

#[tokio::test]
async fn listing_uses_default_page_size() {
    let database = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![row(1), row(2)]]);

    let (status, body) = call(app(database), Method::GET, "/reviews?meetingId=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[1]["title"], "title 2");
}

#[tokio::test]
async fn feed_walks_backwards_from_cursor() {
    let database = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![row(9), row(8), row(7)]]);
    let after = encode_cursor(10, "review");

    let uri = format!("/reviews/feed?first=2&after={}", after);
    let (status, body) = call(app(database), Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["edges"].as_array().unwrap().len(), 2);
    assert_eq!(body["edges"][1]["cursor"], encode_cursor(8, "review"));
    assert_eq!(body["pageInfo"]["hasNextPage"], true);
    assert_eq!(body["pageInfo"]["endCursor"], encode_cursor(8, "review"));
}

#[tokio::test]
async fn update_of_missing_review_reports_zero_rows() {
    let database = MockDatabase::new(DatabaseBackend::MySql).append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 0,
    }]);
    let payload = json!({ "title": "t", "content": "c" });

    let (status, body) = call(app(database), Method::PUT, "/reviews/404", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["affectedRows"], 0);
}

#[tokio::test]
async fn created_review_reads_back_active() {
    let mut created = row(17);
    created.insert("title", "Great meetup".into());
    created.insert("content", "Would join again.".into());

    let database = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 17,
            rows_affected: 1,
        }])
        .append_query_results([vec![created]]);
    let app = app(database);
    let payload = json!({
        "meetingId": 1,
        "userId": "u1",
        "title": "Great meetup",
        "content": "Would join again."
    });

    let (status, body) = call(app.clone(), Method::POST, "/reviews", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();

    let (status, body) = call(app, Method::GET, &format!("/reviews/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Great meetup");
    assert_eq!(body["content"], "Would join again.");
    assert_eq!(body["status"], 1);
}

#[tokio::test]
async fn soft_deleted_review_no_longer_reads() {
    let database = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([Vec::<Row>::new()]);
    let app = app(database);

    let (status, body) = call(app.clone(), Method::DELETE, "/reviews/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["affectedRows"], 1);

    let (status, body) = call(app, Method::GET, "/reviews/3", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Error"].as_str().unwrap().starts_with("Database exception"));
}

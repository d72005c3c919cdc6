//! Integration tests for API endpoints.
//!
//! These tests use fake services to exercise the router without
//! requiring an actual database connection.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use tower::ServiceExt;

use review_api::api::{create_router, AppState};
use review_api::domain::{
    CreateReview, RecordStatus, Review, ReviewConnection, UpdateReview, User,
};
use review_api::errors::{AppError, AppResult};
use review_api::infra::Database;
use review_api::services::{ReviewFilter, ReviewService, UserService};

// =============================================================================
// Fake Services for Testing
// =============================================================================

fn review(id: i64, meeting_id: i64, user_id: &str) -> Review {
    Review {
        id,
        meeting_id,
        user_id: user_id.to_string(),
        title: format!("title {}", id),
        content: format!("content {}", id),
        updated_at: NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(5, 6, 7)
            .unwrap(),
        status: RecordStatus::Active,
    }
}

/// Review service backed by a fixed set of reviews
struct FakeReviewService {
    reviews: Vec<Review>,
}

impl FakeReviewService {
    fn new() -> Self {
        Self {
            reviews: vec![review(3, 1, "u1"), review(2, 1, "u2"), review(1, 2, "u1")],
        }
    }

    fn non_empty(reviews: Vec<Review>) -> AppResult<Vec<Review>> {
        if reviews.is_empty() {
            Err(AppError::EmptyResult)
        } else {
            Ok(reviews)
        }
    }
}

#[async_trait]
impl ReviewService for FakeReviewService {
    async fn get_review(&self, id: i64) -> AppResult<Review> {
        self.reviews
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(AppError::EmptyResult)
    }

    async fn list_reviews(&self, filter: ReviewFilter) -> AppResult<Vec<Review>> {
        let matching = self
            .reviews
            .iter()
            .filter(|r| match (&filter.meeting_id, &filter.user_id) {
                (Some(meeting_id), _) => r.meeting_id == *meeting_id,
                (None, Some(user_id)) => &r.user_id == user_id,
                (None, None) => true,
            })
            .skip(filter.page.offset() as usize)
            .take(filter.page.limit() as usize)
            .cloned()
            .collect();
        Self::non_empty(matching)
    }

    async fn list_reviews_by_meetings(&self, meeting_ids: Vec<i64>) -> AppResult<Vec<Review>> {
        let matching: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| meeting_ids.contains(&r.meeting_id))
            .cloned()
            .collect();
        if matching.is_empty() {
            return Err(AppError::internal("no reviews"));
        }
        Ok(matching)
    }

    async fn list_reviews_by_users(&self, user_ids: Vec<String>) -> AppResult<Vec<Review>> {
        let matching: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| user_ids.contains(&r.user_id))
            .cloned()
            .collect();
        if matching.is_empty() {
            return Err(AppError::internal("no reviews"));
        }
        Ok(matching)
    }

    async fn review_feed(
        &self,
        first: Option<i64>,
        after: Option<String>,
    ) -> AppResult<ReviewConnection> {
        if after.as_deref() == Some("bad") {
            return Err(AppError::CursorValue);
        }
        let first = first.unwrap_or(1);
        let rows = self.reviews.iter().take(first as usize + 1).cloned().collect();
        Ok(ReviewConnection::from_rows(rows, Some(first)))
    }

    async fn create_review(&self, _review: CreateReview) -> AppResult<i64> {
        Ok(42)
    }

    async fn update_review(&self, id: i64, _review: UpdateReview) -> AppResult<u64> {
        Ok(u64::from(self.reviews.iter().any(|r| r.id == id)))
    }

    async fn delete_review(&self, id: i64) -> AppResult<u64> {
        Ok(u64::from(self.reviews.iter().any(|r| r.id == id)))
    }
}

/// User service knowing a single user
struct FakeUserService;

#[async_trait]
impl UserService for FakeUserService {
    async fn get_user(&self, id: &str) -> AppResult<User> {
        if id != "u1" {
            return Err(AppError::EmptyResult);
        }
        Ok(User {
            id: id.to_string(),
            nickname: "jamie".to_string(),
            status: RecordStatus::Active,
        })
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with_database(database: MockDatabase) -> Router {
    let state = AppState::new(
        Arc::new(FakeReviewService::new()),
        Arc::new(FakeUserService),
        Arc::new(Database::new(database.into_connection())),
        10,
    );
    create_router(state)
}

fn app() -> Router {
    app_with_database(MockDatabase::new(DatabaseBackend::MySql))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(app(), Method::GET, uri, None).await
}

// =============================================================================
// Root and Health Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Review API");
}

#[tokio::test]
async fn test_health_with_reachable_database() {
    let database = MockDatabase::new(DatabaseBackend::MySql).append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 0,
    }]);

    let (status, body) = send(app_with_database(database), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/reviews/feed"].is_object());
}

// =============================================================================
// Review Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_get_review() {
    let (status, body) = get("/reviews/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["meetingId"], 1);
    assert_eq!(body["userId"], "u2");
    assert_eq!(body["updatedAt"], "2024-03-04 05:06:07");
}

#[tokio::test]
async fn test_missing_review_is_bad_request_with_error_body() {
    let (status, body) = get("/reviews/99").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Error"].as_str().unwrap().contains("no result"));
}

#[tokio::test]
async fn test_non_numeric_review_id_is_rejected() {
    let (status, body) = get("/reviews/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Error"].is_string());
}

#[tokio::test]
async fn test_list_reviews_filters_by_meeting_first() {
    let (status, body) = get("/reviews?meetingId=2&userId=u2").await;
    assert_eq!(status, StatusCode::OK);

    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["id"], 1);
}

#[tokio::test]
async fn test_list_reviews_pages_through_all() {
    let (status, body) = get("/reviews?pageNum=2&pageSize=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get("/reviews?pageNum=3&pageSize=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["Error"].is_string());
}

#[tokio::test]
async fn test_list_reviews_rejects_page_zero() {
    let (status, _) = get("/reviews?pageNum=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reviews_by_meetings_and_users() {
    let (status, body) = get("/reviews/by-meetings?ids=1,2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = get("/reviews/by-users?ids=u2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = get("/reviews/by-meetings?ids=1,x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get("/reviews/by-meetings").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Error"], "ids is required");
}

#[tokio::test]
async fn test_bulk_miss_hides_internal_details() {
    let (status, body) = get("/reviews/by-users?ids=nobody").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Error"], "An internal error occurred");
}

#[tokio::test]
async fn test_review_feed() {
    let (status, body) = get("/reviews/feed?first=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["edges"].as_array().unwrap().len(), 2);
    assert_eq!(body["edges"][0]["node"]["id"], 3);
    assert_eq!(body["pageInfo"]["hasNextPage"], true);
    assert!(body["pageInfo"]["endCursor"].is_string());

    let (status, body) = get("/reviews/feed?after=bad").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Error"], "Invalid cursor value");
}

#[tokio::test]
async fn test_create_review_returns_created_id() {
    let payload = json!({
        "meetingId": 1,
        "userId": "u1",
        "title": "Great meetup",
        "content": "Would join again."
    });

    let (status, body) = send(app(), Method::POST, "/reviews", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 42 }));
}

#[tokio::test]
async fn test_create_review_reports_missing_field() {
    let payload = json!({ "meetingId": 1, "userId": "u1", "title": "undefined" });

    let (status, body) = send(app(), Method::POST, "/reviews", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Error"], "title is required");
}

#[tokio::test]
async fn test_update_and_delete_report_affected_rows() {
    let payload = json!({ "title": "t", "content": "edited" });
    let (status, body) = send(app(), Method::PUT, "/reviews/3", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "affectedRows": 1 }));

    let (status, body) = send(app(), Method::DELETE, "/reviews/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "affectedRows": 0 }));
}

// =============================================================================
// User Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_get_user() {
    let (status, body) = get("/users/u1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nickname"], "jamie");
    assert_eq!(body["status"], 1);

    let (status, _) = get("/users/ghost").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

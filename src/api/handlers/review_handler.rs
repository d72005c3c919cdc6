//! Review handlers.

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::RequiredJson;
use crate::api::AppState;
use crate::domain::{CreateReview, Review, ReviewConnection, UpdateReview};
use crate::errors::{AppError, AppResult};
use crate::services::ReviewFilter;
use crate::types::{AffectedRows, Created, CreatedId, CursorParams, PaginationParams};

/// Offset listing query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReviewListQuery {
    /// Only reviews of this meeting (wins over `userId`)
    pub meeting_id: Option<i64>,
    /// Only reviews written by this user
    pub user_id: Option<String>,
    /// Page number, starting at 1
    pub page_num: Option<i64>,
    /// Rows per page
    pub page_size: Option<i64>,
}

/// Comma separated id list, e.g. `?ids=1,2,3`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdsQuery {
    pub ids: Option<String>,
}

type ApiPath<T> = WithRejection<Path<T>, AppError>;
type ApiQuery<T> = WithRejection<Query<T>, AppError>;

/// Create review routes
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route("/feed", get(review_feed))
        .route("/by-meetings", get(list_reviews_by_meetings))
        .route("/by-users", get(list_reviews_by_users))
        .route(
            "/:id",
            get(get_review).put(update_review).delete(delete_review),
        )
}

/// Split `1,2,3` into ids, skipping blank segments
fn parse_ids<T: FromStr>(raw: Option<&str>) -> AppResult<Vec<T>> {
    let ids = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .parse::<T>()
                .map_err(|_| AppError::validation(format!("Invalid id: {}", segment)))
        })
        .collect::<AppResult<Vec<T>>>()?;

    if ids.is_empty() {
        return Err(AppError::missing_field("ids"));
    }
    Ok(ids)
}

/// List reviews by meeting, by user, or all
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "Reviews",
    params(ReviewListQuery),
    responses(
        (status = 200, description = "One page of active reviews", body = Vec<Review>),
        (status = 400, description = "Empty result or invalid paging")
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    WithRejection(Query(query), _): ApiQuery<ReviewListQuery>,
) -> AppResult<Json<Vec<Review>>> {
    let page = PaginationParams {
        page_num: query.page_num,
        page_size: query.page_size,
    }
    .into_page(state.default_page_size)?;

    let filter = ReviewFilter {
        meeting_id: query.meeting_id,
        user_id: query.user_id,
        page,
    };
    let reviews = state.review_service.list_reviews(filter).await?;

    Ok(Json(reviews))
}

/// Cursor feed, newest first
#[utoipa::path(
    get,
    path = "/reviews/feed",
    tag = "Reviews",
    params(CursorParams),
    responses(
        (status = 200, description = "Reviews older than the cursor", body = ReviewConnection),
        (status = 400, description = "Invalid cursor or empty result")
    )
)]
pub async fn review_feed(
    State(state): State<AppState>,
    WithRejection(Query(params), _): ApiQuery<CursorParams>,
) -> AppResult<Json<ReviewConnection>> {
    let connection = state
        .review_service
        .review_feed(params.first, params.after)
        .await?;

    Ok(Json(connection))
}

/// Reviews of several meetings
#[utoipa::path(
    get,
    path = "/reviews/by-meetings",
    tag = "Reviews",
    params(IdsQuery),
    responses(
        (status = 200, description = "Reviews of the given meetings", body = Vec<Review>),
        (status = 400, description = "Invalid ids or nothing found")
    )
)]
pub async fn list_reviews_by_meetings(
    State(state): State<AppState>,
    WithRejection(Query(query), _): ApiQuery<IdsQuery>,
) -> AppResult<Json<Vec<Review>>> {
    let meeting_ids = parse_ids::<i64>(query.ids.as_deref())?;
    let reviews = state
        .review_service
        .list_reviews_by_meetings(meeting_ids)
        .await?;

    Ok(Json(reviews))
}

/// Reviews of several users
#[utoipa::path(
    get,
    path = "/reviews/by-users",
    tag = "Reviews",
    params(IdsQuery),
    responses(
        (status = 200, description = "Reviews of the given users", body = Vec<Review>),
        (status = 400, description = "Invalid ids or nothing found")
    )
)]
pub async fn list_reviews_by_users(
    State(state): State<AppState>,
    WithRejection(Query(query), _): ApiQuery<IdsQuery>,
) -> AppResult<Json<Vec<Review>>> {
    let user_ids = parse_ids::<String>(query.ids.as_deref())?;
    let reviews = state.review_service.list_reviews_by_users(user_ids).await?;

    Ok(Json(reviews))
}

/// Get review by ID
#[utoipa::path(
    get,
    path = "/reviews/{id}",
    tag = "Reviews",
    params(("id" = i64, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review found", body = Review),
        (status = 400, description = "Review not found or deleted")
    )
)]
pub async fn get_review(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i64>,
) -> AppResult<Json<Review>> {
    let review = state.review_service.get_review(id).await?;
    Ok(Json(review))
}

/// Create a review
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created", body = CreatedId),
        (status = 400, description = "Missing field or insert failed")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    RequiredJson(payload): RequiredJson<CreateReview>,
) -> AppResult<Created<CreatedId>> {
    let id = state.review_service.create_review(payload).await?;
    Ok(Created(CreatedId { id }))
}

/// Replace title and content of a review
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = "Reviews",
    params(("id" = i64, Path, description = "Review ID")),
    request_body = UpdateReview,
    responses(
        (status = 200, description = "Rows changed, 0 when nothing matched", body = AffectedRows),
        (status = 400, description = "Missing field")
    )
)]
pub async fn update_review(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i64>,
    RequiredJson(payload): RequiredJson<UpdateReview>,
) -> AppResult<Json<AffectedRows>> {
    let affected_rows = state.review_service.update_review(id, payload).await?;
    Ok(Json(AffectedRows { affected_rows }))
}

/// Soft delete a review
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = "Reviews",
    params(("id" = i64, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Rows changed, 0 when nothing matched", body = AffectedRows),
        (status = 400, description = "Invalid id")
    )
)]
pub async fn delete_review(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ApiPath<i64>,
) -> AppResult<Json<AffectedRows>> {
    let affected_rows = state.review_service.delete_review(id).await?;
    Ok(Json(AffectedRows { affected_rows }))
}

//! Review repository implementation with soft delete support.

use async_trait::async_trait;
use sea_orm::Value;

use super::base::{placeholders, SqlClient};
use super::entities::ReviewRow;
use crate::config::{BULK_LIST_LIMIT, STATUS_DELETED};
use crate::domain::{CreateReview, Review, UpdateReview};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{CursorPage, Page};
use crate::utils::is_empty;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// `SELECT <review columns> FROM review <tail>`
macro_rules! review_sql {
    ($tail:literal) => {
        concat!(
            "SELECT id, meetingId AS meeting_id, userId AS user_id, title, content, ",
            "updatedAt AS updated_at FROM review ",
            $tail
        )
    };
}

const INSERT_REVIEW: &str =
    "INSERT INTO review (meetingId, userId, title, content) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = review_sql!("WHERE id = ? AND status = 1");
const SELECT_BY_MEETING: &str = review_sql!("WHERE meetingId = ? AND status = 1 LIMIT ?, ?");
const SELECT_BY_USER: &str = review_sql!("WHERE userId = ? AND status = 1 LIMIT ?, ?");
const SELECT_ALL: &str = review_sql!("WHERE status = 1 LIMIT ?, ?");
const SELECT_AFTER: &str = review_sql!("WHERE id < ? AND status = 1 ORDER BY id DESC LIMIT ?");
const SOFT_DELETE: &str = "UPDATE review SET status = ? WHERE id = ?";
const UPDATE_REVIEW: &str = "UPDATE review SET title = ?, content = ? WHERE id = ?";

/// Review repository trait for dependency injection.
///
/// Every query excludes soft-deleted rows (`status = 0`). Reads that find
/// nothing fail instead of returning an empty value: single and paged
/// reads with [`AppError::EmptyResult`], the bulk "by ids" reads with
/// [`AppError::Internal`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a review, returning the generated id (0 if the driver gave none)
    async fn create(&self, review: &CreateReview) -> AppResult<i64>;

    /// Find active review by ID
    async fn get_by_id(&self, id: i64) -> AppResult<Review>;

    /// Page through the active reviews of one meeting
    async fn list_by_meeting(&self, meeting_id: i64, page: &Page) -> AppResult<Vec<Review>>;

    /// Page through the active reviews of one user
    async fn list_by_user(&self, user_id: &str, page: &Page) -> AppResult<Vec<Review>>;

    /// Page through all active reviews
    async fn list_all(&self, page: &Page) -> AppResult<Vec<Review>>;

    /// Active reviews of several meetings, newest update first, at most 100
    async fn list_by_meeting_ids(&self, meeting_ids: &[i64]) -> AppResult<Vec<Review>>;

    /// Active reviews of several users, at most 100
    async fn list_by_user_ids(&self, user_ids: &[String]) -> AppResult<Vec<Review>>;

    /// Active reviews with ids below `page.after`, highest id first,
    /// at most `page.first` rows
    async fn list_after(&self, page: &CursorPage) -> AppResult<Vec<Review>>;

    /// Soft delete a review, returning the affected row count
    async fn soft_delete(&self, id: i64) -> AppResult<u64>;

    /// Replace title and content, returning the affected row count
    async fn update(&self, id: i64, review: &UpdateReview) -> AppResult<u64>;
}

/// Concrete implementation of ReviewRepository over raw SQL
pub struct ReviewStore {
    client: SqlClient,
}

impl ReviewStore {
    /// Create new repository instance
    pub fn new(client: SqlClient) -> Self {
        Self { client }
    }

    async fn paged(&self, sql: &str, mut values: Vec<Value>, page: &Page) -> AppResult<Vec<Review>> {
        if page.is_invalid() {
            return Err(AppError::bad_request("pageNum and pageSize are required"));
        }
        values.push(page.offset().into());
        values.push(page.limit().into());

        let rows: Vec<ReviewRow> = self.client.select(sql, values).await?;
        into_reviews(rows, || AppError::EmptyResult)
    }
}

/// Map rows to reviews, failing with `empty()` when there are none
fn into_reviews(rows: Vec<ReviewRow>, empty: impl FnOnce() -> AppError) -> AppResult<Vec<Review>> {
    if is_empty(&rows) {
        return Err(empty());
    }
    Ok(rows.into_iter().map(Review::from).collect())
}

#[async_trait]
impl ReviewRepository for ReviewStore {
    async fn create(&self, review: &CreateReview) -> AppResult<i64> {
        let values = vec![
            review.meeting_id.into(),
            review.user_id.clone().into(),
            review.title.clone().into(),
            review.content.clone().into(),
        ];

        let result = self.client.execute(INSERT_REVIEW, values).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::EmptyResult);
        }

        let id = i64::try_from(result.last_insert_id()).unwrap_or(0);
        tracing::info!(review_id = id, meeting_id = review.meeting_id, "Review created");
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Review> {
        let row: Option<ReviewRow> = self.client.select_one(SELECT_BY_ID, vec![id.into()]).await?;
        row.ok_or_empty().map(Review::from)
    }

    async fn list_by_meeting(&self, meeting_id: i64, page: &Page) -> AppResult<Vec<Review>> {
        self.paged(SELECT_BY_MEETING, vec![meeting_id.into()], page).await
    }

    async fn list_by_user(&self, user_id: &str, page: &Page) -> AppResult<Vec<Review>> {
        self.paged(SELECT_BY_USER, vec![user_id.into()], page).await
    }

    async fn list_all(&self, page: &Page) -> AppResult<Vec<Review>> {
        self.paged(SELECT_ALL, Vec::new(), page).await
    }

    async fn list_by_meeting_ids(&self, meeting_ids: &[i64]) -> AppResult<Vec<Review>> {
        if is_empty(meeting_ids) {
            return Err(AppError::internal("no meeting ids given"));
        }

        let sql = format!(
            review_sql!("WHERE meetingId IN ({}) AND status = 1 ORDER BY updatedAt DESC LIMIT ?"),
            placeholders(meeting_ids.len())
        );
        let mut values: Vec<Value> = meeting_ids.iter().map(|&id| id.into()).collect();
        values.push(BULK_LIST_LIMIT.into());

        let rows: Vec<ReviewRow> = self.client.select(&sql, values).await?;
        into_reviews(rows, || AppError::internal("no reviews for the given meetings"))
    }

    async fn list_by_user_ids(&self, user_ids: &[String]) -> AppResult<Vec<Review>> {
        if is_empty(user_ids) {
            return Err(AppError::internal("no user ids given"));
        }

        let sql = format!(
            review_sql!("WHERE userId IN ({}) AND status = 1 LIMIT ?"),
            placeholders(user_ids.len())
        );
        let mut values: Vec<Value> = user_ids.iter().map(|id| id.clone().into()).collect();
        values.push(BULK_LIST_LIMIT.into());

        let rows: Vec<ReviewRow> = self.client.select(&sql, values).await?;
        into_reviews(rows, || AppError::internal("no reviews for the given users"))
    }

    async fn list_after(&self, page: &CursorPage) -> AppResult<Vec<Review>> {
        if page.has_offset_fields() {
            return Err(AppError::bad_request(
                "pageNum and pageSize cannot be combined with first/after",
            ));
        }

        let values = vec![page.after.into(), page.first.into()];
        let rows: Vec<ReviewRow> = self.client.select(SELECT_AFTER, values).await?;
        into_reviews(rows, || AppError::EmptyResult)
    }

    async fn soft_delete(&self, id: i64) -> AppResult<u64> {
        let values = vec![STATUS_DELETED.into(), id.into()];
        let result = self.client.execute(SOFT_DELETE, values).await?;

        tracing::info!(review_id = id, affected = result.rows_affected(), "Review soft deleted");
        Ok(result.rows_affected())
    }

    async fn update(&self, id: i64, review: &UpdateReview) -> AppResult<u64> {
        let values = vec![
            review.title.clone().into(),
            review.content.clone().into(),
            id.into(),
        ];
        let result = self.client.execute(UPDATE_REVIEW, values).await?;
        Ok(result.rows_affected())
    }
}

//! Review service - Handles review-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::DEFAULT_CURSOR_LAST_ID;
use crate::domain::{CreateReview, Review, ReviewConnection, UpdateReview};
use crate::errors::{AppError, AppResult};
use crate::infra::ReviewRepository;
use crate::types::Page;
use crate::utils::build_cursor_page;

/// Which reviews an offset listing should return
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub meeting_id: Option<i64>,
    pub user_id: Option<String>,
    pub page: Page,
}

/// Review service trait for dependency injection.
///
/// Reads never return an empty result; "nothing found" is an error.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Get active review by ID
    async fn get_review(&self, id: i64) -> AppResult<Review>;

    /// Offset listing. A meeting filter wins over a user filter;
    /// with neither, all active reviews are paged.
    async fn list_reviews(&self, filter: ReviewFilter) -> AppResult<Vec<Review>>;

    /// Reviews of several meetings
    async fn list_reviews_by_meetings(&self, meeting_ids: Vec<i64>) -> AppResult<Vec<Review>>;

    /// Reviews of several users
    async fn list_reviews_by_users(&self, user_ids: Vec<String>) -> AppResult<Vec<Review>>;

    /// Cursor listing, newest id first
    async fn review_feed(&self, first: Option<i64>, after: Option<String>)
        -> AppResult<ReviewConnection>;

    /// Create a review, returning its id
    async fn create_review(&self, review: CreateReview) -> AppResult<i64>;

    /// Replace title and content, returning the affected row count
    async fn update_review(&self, id: i64, review: UpdateReview) -> AppResult<u64>;

    /// Soft delete, returning the affected row count
    async fn delete_review(&self, id: i64) -> AppResult<u64>;
}

/// Concrete implementation of ReviewService
pub struct ReviewManager {
    reviews: Arc<dyn ReviewRepository>,
}

impl ReviewManager {
    /// Create new review service instance
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }
}

#[async_trait]
impl ReviewService for ReviewManager {
    async fn get_review(&self, id: i64) -> AppResult<Review> {
        self.reviews.get_by_id(id).await
    }

    async fn list_reviews(&self, filter: ReviewFilter) -> AppResult<Vec<Review>> {
        match (filter.meeting_id, filter.user_id) {
            (Some(meeting_id), _) => self.reviews.list_by_meeting(meeting_id, &filter.page).await,
            (None, Some(user_id)) => self.reviews.list_by_user(&user_id, &filter.page).await,
            (None, None) => self.reviews.list_all(&filter.page).await,
        }
    }

    async fn list_reviews_by_meetings(&self, meeting_ids: Vec<i64>) -> AppResult<Vec<Review>> {
        self.reviews.list_by_meeting_ids(&meeting_ids).await
    }

    async fn list_reviews_by_users(&self, user_ids: Vec<String>) -> AppResult<Vec<Review>> {
        self.reviews.list_by_user_ids(&user_ids).await
    }

    async fn review_feed(
        &self,
        first: Option<i64>,
        after: Option<String>,
    ) -> AppResult<ReviewConnection> {
        if first.is_some_and(|n| n < 0) {
            return Err(AppError::validation("first must not be negative"));
        }

        let page = build_cursor_page(None, None, first, after.as_deref(), DEFAULT_CURSOR_LAST_ID)?;
        let rows = self.reviews.list_after(&page).await?;

        Ok(ReviewConnection::from_rows(rows, first.filter(|&n| n != 0)))
    }

    async fn create_review(&self, review: CreateReview) -> AppResult<i64> {
        self.reviews.create(&review).await
    }

    async fn update_review(&self, id: i64, review: UpdateReview) -> AppResult<u64> {
        self.reviews.update(id, &review).await
    }

    async fn delete_review(&self, id: i64) -> AppResult<u64> {
        self.reviews.soft_delete(id).await
    }
}

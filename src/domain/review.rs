//! Review domain entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{CURSOR_TYPE_REVIEW, STATUS_ACTIVE, STATUS_DELETED};
use crate::types::PageInfo;
use crate::utils::{encode_cursor, serialize_timestamp};

/// Soft-delete flag stored in the `status` column.
///
/// Serialized as the column value: 1 active, 0 deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i32")]
pub enum RecordStatus {
    Deleted,
    Active,
}

impl From<RecordStatus> for i32 {
    fn from(status: RecordStatus) -> Self {
        match status {
            RecordStatus::Active => STATUS_ACTIVE,
            RecordStatus::Deleted => STATUS_DELETED,
        }
    }
}

/// Review domain entity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub meeting_id: i64,
    #[schema(example = "u1")]
    pub user_id: String,
    #[schema(example = "Great meetup")]
    pub title: String,
    #[schema(example = "Would join again.")]
    pub content: String,
    /// Last update time, `YYYY-MM-DD HH:MM:SS`
    #[serde(serialize_with = "serialize_timestamp")]
    #[schema(value_type = String, example = "2024-03-04 05:06:07")]
    pub updated_at: NaiveDateTime,
    /// 1 active, 0 deleted
    #[schema(value_type = i32, example = 1)]
    pub status: RecordStatus,
}

impl Review {
    /// Opaque cursor pointing at this review
    pub fn cursor(&self) -> String {
        encode_cursor(self.id, CURSOR_TYPE_REVIEW)
    }
}

/// Review creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    #[schema(example = 1)]
    pub meeting_id: i64,
    #[schema(example = "u1")]
    pub user_id: String,
    #[schema(example = "Great meetup")]
    pub title: String,
    #[schema(example = "Would join again.")]
    pub content: String,
}

/// Request bodies that name the keys which must be present and non-empty
pub trait RequiredFields {
    const REQUIRED_FIELDS: &'static [&'static str];
}

impl RequiredFields for CreateReview {
    const REQUIRED_FIELDS: &'static [&'static str] = &["meetingId", "userId", "title", "content"];
}

/// Review update data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateReview {
    #[schema(example = "Great meetup")]
    pub title: String,
    #[schema(example = "Edited after the fact.")]
    pub content: String,
}

impl RequiredFields for UpdateReview {
    const REQUIRED_FIELDS: &'static [&'static str] = &["title", "content"];
}

/// One review with its cursor
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewEdge {
    pub cursor: String,
    pub node: Review,
}

/// A cursor-paginated slice of reviews
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewConnection {
    pub edges: Vec<ReviewEdge>,
    pub page_info: PageInfo,
}

impl ReviewConnection {
    /// Build a connection from rows fetched with one extra row of lookahead.
    ///
    /// With `requested = Some(n)`, more than `n` rows means another page
    /// exists and the surplus is dropped. Without a requested size every row
    /// is kept and no further page is reported.
    pub fn from_rows(mut rows: Vec<Review>, requested: Option<i64>) -> Self {
        let has_next_page = match requested {
            Some(n) => {
                let n = usize::try_from(n).unwrap_or(0);
                let more = rows.len() > n;
                rows.truncate(n);
                more
            }
            None => false,
        };

        let edges: Vec<ReviewEdge> = rows
            .into_iter()
            .map(|review| ReviewEdge {
                cursor: review.cursor(),
                node: review,
            })
            .collect();
        let end_cursor = edges.last().map(|edge| edge.cursor.clone());

        Self {
            edges,
            page_info: PageInfo {
                has_next_page,
                end_cursor,
            },
        }
    }
}

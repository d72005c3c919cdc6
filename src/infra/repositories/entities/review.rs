//! Review row as selected from the `review` table.

use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;

use crate::domain::{RecordStatus, Review};

/// Active review row. Queries filter on `status = 1`, so the status
/// column itself is not selected.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ReviewRow {
    pub id: i64,
    pub meeting_id: i64,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub updated_at: NaiveDateTime,
}

/// Convert database row to domain entity
impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            meeting_id: row.meeting_id,
            user_id: row.user_id,
            title: row.title,
            content: row.content,
            updated_at: row.updated_at,
            status: RecordStatus::Active,
        }
    }
}

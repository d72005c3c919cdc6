//! User domain entity.

use serde::Serialize;
use utoipa::ToSchema;

use super::RecordStatus;

/// User domain entity (read-only in this service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    #[schema(example = "u1")]
    pub id: String,
    #[schema(example = "jamie")]
    pub nickname: String,
    /// 1 active, 0 deleted
    #[schema(value_type = i32, example = 1)]
    pub status: RecordStatus,
}

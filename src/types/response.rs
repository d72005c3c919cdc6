use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned after an insert
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedId {
    /// Generated id, 0 when the driver reported none
    #[schema(example = 42)]
    pub id: i64,
}

/// Body returned after an update or soft delete
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AffectedRows {
    #[schema(example = 1)]
    pub affected_rows: u64,
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

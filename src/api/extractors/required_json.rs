//! JSON extractor that checks required keys before deserializing.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::RequiredFields;
use crate::errors::AppError;
use crate::utils::check_required_fields;

/// JSON body extractor reporting the first missing key as `MissingField`.
///
/// The body is parsed as a plain JSON value first so that an absent,
/// `null`, `""` or `"undefined"` key yields `"<key> is required"` instead of
/// a serde error. Type mismatches after that surface as validation errors.
///
/// # Example
///
/// ```rust,ignore
/// async fn create(RequiredJson(payload): RequiredJson<CreateReview>) {
///     // every key in CreateReview::REQUIRED_FIELDS is present
/// }
/// ```
pub struct RequiredJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RequiredJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + RequiredFields,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;

        check_required_fields(&body, T::REQUIRED_FIELDS)?;

        let value = serde_json::from_value(body).map_err(|e| AppError::validation(e.to_string()))?;

        Ok(RequiredJson(value))
    }
}

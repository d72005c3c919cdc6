//! Opaque pagination cursors.
//!
//! A cursor is the standard base64 encoding of `"<id>/<type>"`. It is an
//! opaque token for clients, not a signed or encrypted value.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;

use crate::config::PAGE_INVALID;
use crate::errors::{AppError, AppResult};
use crate::types::CursorPage;

/// Encode an id and a type tag into a cursor.
pub fn encode_cursor(id: impl std::fmt::Display, kind: &str) -> String {
    B64.encode(format!("{}/{}", id, kind))
}

/// Decode a cursor back to the id segment it was built from.
pub fn decode_cursor(cursor: Option<&str>) -> AppResult<String> {
    let cursor = cursor.ok_or(AppError::CursorValue)?;

    let bytes = B64.decode(cursor).map_err(|_| AppError::CursorValue)?;
    let decoded = String::from_utf8(bytes).map_err(|_| AppError::CursorValue)?;

    match decoded.split('/').next() {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(AppError::CursorValue),
    }
}

/// Build a cursor page from loosely supplied request values.
///
/// Absent or zero `page_num`/`page_size` become [`PAGE_INVALID`].
/// A supplied `first` is raised by one so the query fetches an extra row
/// for has-next-page detection; otherwise it is 1. A supplied `after`
/// cursor is decoded to an id, otherwise `last_id` is used.
pub fn build_cursor_page(
    page_num: Option<i64>,
    page_size: Option<i64>,
    first: Option<i64>,
    after: Option<&str>,
    last_id: i64,
) -> AppResult<CursorPage> {
    let or_invalid = |value: Option<i64>| match value {
        Some(v) if v != 0 => v,
        _ => PAGE_INVALID,
    };

    let first = match first {
        Some(n) if n != 0 => n
            .checked_add(1)
            .ok_or_else(|| AppError::validation("first is too large"))?,
        _ => 1,
    };

    let after = match after {
        Some(cursor) if !cursor.is_empty() => decode_cursor(Some(cursor))?
            .parse::<i64>()
            .map_err(|_| AppError::CursorValue)?,
        _ => last_id,
    };

    Ok(CursorPage {
        page_num: or_invalid(page_num),
        page_size: or_invalid(page_size),
        first,
        after,
    })
}

//! Time comparison and formatting helpers.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serializer;

use crate::errors::{AppError, AppResult};

/// `YYYY-MM-DD HH:MM`, unanchored: a match anywhere in the
/// input is accepted.
static DATETIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1]) (2[0-3]|[01][0-9]):[0-5][0-9]")
        .expect("datetime pattern is valid")
});

/// True when `comparing` lies at least `threshold_ms` before `standard`.
pub fn is_before(comparing: i64, standard: i64, threshold_ms: i64) -> bool {
    standard - comparing >= threshold_ms
}

/// True when `comparing` lies strictly more than `threshold_ms` after `standard`.
pub fn is_after(comparing: i64, standard: i64, threshold_ms: i64) -> bool {
    comparing - standard > threshold_ms
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Serde helper writing a timestamp through [`format_timestamp`].
pub fn serialize_timestamp<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(date))
}

/// Fail with [`AppError::DateFormat`] unless `input` contains a
/// `YYYY-MM-DD HH:MM` date.
pub fn validate_date_format(input: &str) -> AppResult<()> {
    if DATETIME_PATTERN.is_match(input) {
        Ok(())
    } else {
        Err(AppError::DateFormat)
    }
}

//! Emptiness checks.
//!
//! `is_empty` is the one "no data" signal used across the crate: repositories
//! run it over result sets and the API layer runs it over request bodies.

use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Placeholder text some clients send for a value they never set.
const UNDEFINED_TEXT: &str = "undefined";

/// Values that can be "blank".
///
/// Blank means: null/absent, an empty string, the text `"undefined"`,
/// or a container with no entries. Numbers and booleans are never blank,
/// so `0`, `false` and `"0"` all carry data.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty() || self == UNDEFINED_TEXT
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_blank(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

/// Check whether a value carries no data.
pub fn is_empty<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}

/// Fail with [`AppError::MissingField`] naming the first blank key.
///
/// Keys are checked in the order given; a key missing from `obj` counts
/// as blank.
pub fn check_required_fields(obj: &Value, keys: &[&str]) -> AppResult<()> {
    for key in keys {
        let blank = obj.get(*key).map_or(true, |value| is_empty(value));
        if blank {
            return Err(AppError::missing_field(*key));
        }
    }
    Ok(())
}

//! Utility functions and helpers.
//!
//! Emptiness checks, opaque pagination cursors and time helpers shared by
//! the repository, service and API layers.

pub mod cursor;
pub mod empty;
pub mod time;

pub use cursor::{build_cursor_page, decode_cursor, encode_cursor};
pub use empty::{check_required_fields, is_empty, Blank};
pub use time::{format_timestamp, is_after, is_before, serialize_timestamp, validate_date_format};

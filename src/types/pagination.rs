//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PAGE_INVALID};
use crate::errors::{AppError, AppResult};

/// Row offset of a page: `(page_num - 1) * page_size`.
///
/// No bounds checks; a page number below 1 yields a negative offset.
pub fn compute_offset(page_num: i64, page_size: i64) -> i64 {
    (page_num - 1) * page_size
}

/// Offset pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page_num: i64,
    pub page_size: i64,
}

impl Page {
    /// Create a page, enforcing `page_num >= 1` and a non-negative size.
    pub fn new(page_num: i64, page_size: i64) -> AppResult<Self> {
        if page_num < 1 {
            return Err(AppError::validation("pageNum must be 1 or greater"));
        }
        if page_size < 0 {
            return Err(AppError::validation("pageSize must not be negative"));
        }
        Ok(Self {
            page_num,
            page_size,
        })
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> i64 {
        compute_offset(self.page_num, self.page_size)
    }

    /// Number of rows to fetch
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Whether either field still holds the unset sentinel
    pub fn is_invalid(&self) -> bool {
        self.page_num == PAGE_INVALID || self.page_size == PAGE_INVALID
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page_num: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Offset pagination query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, starting at 1
    pub page_num: Option<i64>,
    /// Rows per page
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// Resolve into a validated page, filling in defaults.
    pub fn into_page(self, default_page_size: i64) -> AppResult<Page> {
        Page::new(
            self.page_num.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(default_page_size),
        )
    }
}

/// Forward cursor pagination request.
///
/// Built by [`crate::utils::build_cursor_page`]. `first` already includes
/// the extra row fetched for has-next-page detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPage {
    pub page_num: i64,
    pub page_size: i64,
    pub first: i64,
    pub after: i64,
}

impl CursorPage {
    /// Whether pageNum or pageSize was also supplied; cursor listings
    /// refuse to mix the two pagination styles.
    pub fn has_offset_fields(&self) -> bool {
        self.page_num != PAGE_INVALID || self.page_size != PAGE_INVALID
    }
}

/// Cursor pagination query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CursorParams {
    /// Number of rows wanted
    pub first: Option<i64>,
    /// Cursor of the last row already seen
    pub after: Option<String>,
}

/// Position information of a cursor page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

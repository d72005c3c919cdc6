//! Shared types (pagination, responses).

mod pagination;
mod response;

pub use pagination::{
    compute_offset, CursorPage, CursorParams, Page, PageInfo, PaginationParams,
};
pub use response::{AffectedRows, Created, CreatedId};

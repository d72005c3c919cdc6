//! Repository layer - Data access abstraction
//!
//! Repositories issue parameterized SQL through [`SqlClient`] and map the
//! rows to domain records.
//!
//! Contract: a get or list that finds nothing is an error, never an empty
//! value. Callers receive [`crate::errors::AppError::EmptyResult`] (or
//! `Internal` for the bulk "by ids" listings) instead of `None` or `[]`.

mod base;
pub(crate) mod entities;
mod review_repository;
mod user_repository;

pub use base::SqlClient;
pub use review_repository::{ReviewRepository, ReviewStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use review_repository::MockReviewRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

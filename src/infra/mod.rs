//! Infrastructure layer - External systems integration
//!
//! This module handles the MySQL connection and the repositories that
//! run raw SQL against it.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{ReviewRepository, ReviewStore, SqlClient, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockReviewRepository, MockUserRepository};

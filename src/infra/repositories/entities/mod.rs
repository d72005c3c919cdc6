//! Raw row shapes returned by the SQL queries
//!
//! These are database-specific records separate from domain models.
//! Column aliases in the queries match the field names here.

pub mod review;
pub mod user;

pub use review::ReviewRow;
pub use user::UserRow;

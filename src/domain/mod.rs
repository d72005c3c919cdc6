//! Domain layer - Core business entities
//!
//! Domain models that represent business concepts independent of
//! infrastructure concerns.

pub mod review;
pub mod user;

pub use review::{
    CreateReview, RecordStatus, RequiredFields, Review, ReviewConnection, ReviewEdge,
    UpdateReview,
};
pub use user::User;

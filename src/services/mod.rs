//! Application services layer - Use cases.
//!
//! Services orchestrate repository calls per route. They depend on
//! repository traits, so tests can swap in mocks.

pub mod container;
mod review_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use review_service::{ReviewFilter, ReviewManager, ReviewService};
pub use user_service::{UserManager, UserService};

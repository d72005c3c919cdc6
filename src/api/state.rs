//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{ReviewService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Review service
    pub review_service: Arc<dyn ReviewService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Page size used when a listing omits `pageSize`
    pub default_page_size: i64,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            review_service: container.reviews(),
            user_service: container.users(),
            database,
            default_page_size: config.default_page_size,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        review_service: Arc<dyn ReviewService>,
        user_service: Arc<dyn UserService>,
        database: Arc<Database>,
        default_page_size: i64,
    ) -> Self {
        Self {
            review_service,
            user_service,
            database,
            default_page_size,
        }
    }
}

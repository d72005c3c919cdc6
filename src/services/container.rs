//! Service Container - Centralized service access.
//!
//! Builds the repository and service graph from one database connection
//! and hands out the services as trait objects.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{ReviewManager, ReviewService, UserManager, UserService};
use crate::infra::{ReviewStore, SqlClient, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get review service
    fn reviews(&self) -> Arc<dyn ReviewService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    review_service: Arc<dyn ReviewService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a service container from already built services
    pub fn new(review_service: Arc<dyn ReviewService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            review_service,
            user_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let client = SqlClient::new(db);
        let review_repo = Arc::new(ReviewStore::new(client.clone()));
        let user_repo = Arc::new(UserStore::new(client));

        Self {
            review_service: Arc::new(ReviewManager::new(review_repo)),
            user_service: Arc::new(UserManager::new(user_repo)),
        }
    }
}

impl ServiceContainer for Services {
    fn reviews(&self) -> Arc<dyn ReviewService> {
        self.review_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}

//! User repository implementation.

use async_trait::async_trait;

use super::base::SqlClient;
use super::entities::UserRow;
use crate::domain::User;
use crate::errors::{AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const SELECT_BY_ID: &str = "SELECT id, nickname FROM user WHERE id = ? AND status = 1";

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find active user by ID; a missing or deleted user is `EmptyResult`
    async fn get_by_id(&self, id: &str) -> AppResult<User>;
}

/// Concrete implementation of UserRepository over raw SQL
pub struct UserStore {
    client: SqlClient,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(client: SqlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn get_by_id(&self, id: &str) -> AppResult<User> {
        let row: Option<UserRow> = self.client.select_one(SELECT_BY_ID, vec![id.into()]).await?;
        row.ok_or_empty().map(User::from)
    }
}

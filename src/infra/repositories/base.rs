//! Raw SQL access shared by all repositories.
//!
//! [`SqlClient`] is the `execute(sql, params)` capability the repositories
//! are built on: SELECTs come back as typed rows, INSERT/UPDATE as an
//! [`ExecResult`] carrying `last_insert_id` and `rows_affected`.

use sea_orm::{
    ConnectionTrait, DatabaseConnection, ExecResult, FromQueryResult, Statement, Value,
};

use crate::errors::AppResult;

/// Thin wrapper running parameterized statements on a connection
#[derive(Clone)]
pub struct SqlClient {
    db: DatabaseConnection,
}

impl SqlClient {
    /// Create new client over a connection (pool)
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn statement(&self, sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }

    /// Run a SELECT and map every row
    pub async fn select<M>(&self, sql: &str, values: Vec<Value>) -> AppResult<Vec<M>>
    where
        M: FromQueryResult + Send + Sync,
    {
        tracing::debug!(params = values.len(), "select: {}", sql);
        let rows = M::find_by_statement(self.statement(sql, values))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Run a SELECT expected to match at most one row
    pub async fn select_one<M>(&self, sql: &str, values: Vec<Value>) -> AppResult<Option<M>>
    where
        M: FromQueryResult + Send + Sync,
    {
        tracing::debug!(params = values.len(), "select one: {}", sql);
        let row = M::find_by_statement(self.statement(sql, values))
            .one(&self.db)
            .await?;
        Ok(row)
    }

    /// Run an INSERT/UPDATE
    pub async fn execute(&self, sql: &str, values: Vec<Value>) -> AppResult<ExecResult> {
        tracing::debug!(params = values.len(), "execute: {}", sql);
        let result = self.db.execute(self.statement(sql, values)).await?;
        Ok(result)
    }
}

/// `?, ?, ?` for binding `count` values in an `IN (...)` list
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

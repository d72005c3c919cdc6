//! User row as selected from the `user` table.

use sea_orm::FromQueryResult;

use crate::domain::{RecordStatus, User};

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct UserRow {
    pub id: String,
    pub nickname: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            nickname: row.nickname,
            status: RecordStatus::Active,
        }
    }
}

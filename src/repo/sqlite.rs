use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::{CommentStore, StoreError};
use crate::models::CommentRecord;

#[derive(Clone)]
pub struct SqliteCommentStore {
    pool: Arc<SqlitePool>,
    table: String,
}

impl SqliteCommentStore {
    /// `table` must already be a validated SQL identifier; it is interpolated
    /// into the statements below.
    pub fn new(pool: Arc<SqlitePool>, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Create the comments table if it does not exist yet
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        let statement = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                userid TEXT PRIMARY KEY NOT NULL,
                comment TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
            self.table
        );

        sqlx::query(&statement).execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

#[async_trait]
impl CommentStore for SqliteCommentStore {
    async fn put(&self, record: &CommentRecord) -> Result<(), StoreError> {
        let statement = format!(
            r#"
            INSERT INTO {} (userid, comment, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT(userid) DO UPDATE
            SET comment = excluded.comment, created_at = excluded.created_at
            "#,
            self.table
        );

        sqlx::query(&statement)
            .bind(&record.userid)
            .bind(&record.comment)
            .bind(record.created_at)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn get(&self, userid: &str) -> Result<Option<CommentRecord>, StoreError> {
        let statement = format!(
            "SELECT userid, comment, created_at FROM {} WHERE userid = $1",
            self.table
        );

        let record = sqlx::query_as::<_, CommentRecord>(&statement)
            .bind(userid)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(record)
    }
}

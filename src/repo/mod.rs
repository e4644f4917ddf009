pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::models::CommentRecord;

pub use memory::MemoryCommentStore;
pub use sqlite::SqliteCommentStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store did not answer within {0:?}")]
    Timeout(std::time::Duration),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value persistence for comment records, keyed by `userid`.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Inserts the record, replacing any record already stored under its `userid`.
    async fn put(&self, record: &CommentRecord) -> Result<(), StoreError>;

    /// Reads the record stored under `userid`.
    async fn get(&self, userid: &str) -> Result<Option<CommentRecord>, StoreError>;
}

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use super::{CommentStore, StoreError};
use crate::models::CommentRecord;

/// In-process store, used for local runs (`DATABASE_URL=memory`) and tests.
#[derive(Clone, Default)]
pub struct MemoryCommentStore {
    records: Arc<DashMap<String, CommentRecord>>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn put(&self, record: &CommentRecord) -> Result<(), StoreError> {
        self.records.insert(record.userid.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, userid: &str) -> Result<Option<CommentRecord>, StoreError> {
        Ok(self.records.get(userid).map(|entry| entry.value().clone()))
    }
}

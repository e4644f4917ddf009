use std::sync::Arc;
use std::time::Duration;

use crate::config::DEFAULT_STORE_TIMEOUT_SECS;
use crate::repo::CommentStore;

#[derive(Clone)]
pub struct AppState {
    pub comments: Arc<dyn CommentStore>,
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(comments: Arc<dyn CommentStore>) -> Self {
        Self {
            comments,
            store_timeout: Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }
}

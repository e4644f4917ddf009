pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod state;
pub mod validation;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::post,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/test",
            post(handlers::submit::submit_comment)
                .options(handlers::submit::preflight)
                .fallback(handlers::fallback::not_found),
        )
        .fallback(handlers::fallback::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handlers::fallback::handle_panic))
                // Comments are stored whole, whatever their size.
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
}

pub mod test_utils {
    use crate::repo::{MemoryCommentStore, SqliteCommentStore};
    use crate::state::AppState;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use std::sync::Arc;

    pub async fn create_test_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test pool")
    }

    /// State backed by an in-memory store; the returned handle shares its records.
    pub fn create_test_state() -> (AppState, MemoryCommentStore) {
        let store = MemoryCommentStore::new();
        (AppState::new(Arc::new(store.clone())), store)
    }

    pub async fn create_sqlite_state() -> (AppState, SqliteCommentStore) {
        let pool = create_test_pool().await;
        let store = SqliteCommentStore::new(Arc::new(pool), "comments");
        store
            .ensure_table()
            .await
            .expect("Failed to create comments table");
        (AppState::new(Arc::new(store.clone())), store)
    }
}

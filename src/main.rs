use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comment_box::{
    config::Config,
    create_router,
    repo::{CommentStore, MemoryCommentStore, SqliteCommentStore},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comment_box=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = connect_store(&config).await?;

    let state = AppState::new(store).with_store_timeout(config.store_timeout);
    let app = create_router(state);

    let addr = config.addr();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn CommentStore>> {
    if config.uses_memory_store() {
        tracing::warn!("Using in-memory store, comments are lost on exit");
        return Ok(Arc::new(MemoryCommentStore::new()));
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let store = SqliteCommentStore::new(Arc::new(pool), config.table_name.clone());
    store.ensure_table().await?;

    tracing::info!(
        region = %config.region,
        table = %store.table(),
        "Connected to comment store"
    );

    Ok(Arc::new(store))
}

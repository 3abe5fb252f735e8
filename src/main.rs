use std::sync::Arc;

use shelfwise_api::{
    config::{CatalogBackend, Config},
    db::{self, Cache, CacheWriterHandle},
    routes::{create_router, AppState},
    services::catalog::{InMemoryCatalog, PgCatalog},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelfwise_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let (state, cache_handle) = build_state(&config).await?;
    let app = create_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        address = %config.bind_address(),
        backend = ?config.catalog_backend,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_handle {
        handle.shutdown().await;
    }

    Ok(())
}

/// Wires the configured catalog backend into the application state
async fn build_state(config: &Config) -> anyhow::Result<(AppState, Option<CacheWriterHandle>)> {
    match config.catalog_backend {
        CatalogBackend::Postgres => {
            let pool = db::create_pool(&config.database_url).await?;
            db::run_migrations(&pool).await?;

            let redis_client = db::create_redis_client(&config.redis_url)?;
            let (cache, handle) = Cache::new(redis_client).await;

            let catalog = Arc::new(PgCatalog::new(pool, cache, config.genre_cache_ttl_secs));
            let state = AppState::new(catalog.clone(), catalog)
                .with_default_limit(config.default_recommendation_limit);

            Ok((state, Some(handle)))
        }
        CatalogBackend::Memory => {
            let path = config.catalog_seed_path.as_deref().ok_or_else(|| {
                anyhow::anyhow!("CATALOG_SEED_PATH is required for the memory backend")
            })?;
            let catalog = InMemoryCatalog::from_json_file(path)?;
            let state = AppState::in_memory(catalog)
                .with_default_limit(config.default_recommendation_limit);

            Ok((state, None))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, state wiring, and the Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::MappingStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Connects the store selected by `config.store_backend`.
///
/// Redis connections are retried with exponential backoff up to
/// `config.store_connect_retries` times.
///
/// # Errors
///
/// Returns an error if Redis stays unreachable after all retries.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    let store: Arc<dyn MappingStore> = match config.store_backend {
        StoreBackend::Redis => {
            let redis =
                RedisStore::connect_with_retry(&config.redis_url, config.store_connect_retries)
                    .await
                    .context("Failed to connect to Redis")?;
            Arc::new(redis)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; mappings are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (Redis or memory)
/// - Application state and router
/// - Axum HTTP server, stopped gracefully on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let state = AppState::new(store, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

//! HTTP server initialization and runtime setup.
//!
//! Handles counter store setup, state wiring, and Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::config::Config;
use crate::domain::counter::CounterStore;
use crate::domain::token::TokenCodec;
use crate::infrastructure::store::{MemoryCounterStore, RedisCounterStore};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis counter store (or in-memory fallback when Redis is unconfigured)
/// - Token codec with the process-wide signing key
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Redis connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn CounterStore> = if let Some(redis_url) = &config.redis_url {
        let redis = RedisCounterStore::connect(redis_url, config.store_max_retries).await?;
        tracing::info!("Counter store: Redis");
        Arc::new(redis)
    } else {
        tracing::warn!("REDIS_URL not set; click counts held in process memory only");
        Arc::new(MemoryCounterStore::new())
    };

    let codec = Arc::new(TokenCodec::new(&config.signing_key));
    let state = AppState::new(codec, store);

    let app = app_router(state, Duration::from_secs(config.request_timeout_secs));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Completes when the process receives Ctrl-C.
///
/// In-flight requests, including counter increments already started, are
/// allowed to finish before the server exits.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

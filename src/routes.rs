//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /?event=<token>` - Token redirect with click tracking
//! - `POST /make`           - Batch redirect link creation
//! - `POST /stats`          - Batch click statistics
//! - `GET  /health`         - Health check: counter store
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Process-wide request deadline
//! - **Path normalization** - Trailing slash stripping

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api::handlers::{health_handler, make_handler, redirect_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline applied to every request by the transport
///   layer; handlers themselves never block beyond the store round trip
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(redirect_handler))
        .route("/make", post(make_handler))
        .route("/stats", post(stats_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

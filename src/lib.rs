//! # Eventlink
//!
//! A signed-token redirect service with click analytics, built with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Token codec and counter store contract
//! - **Application Layer** ([`application`]) - Batch link creation and stats retrieval
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory counter stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Tamper-evident redirect tokens (JWT, HS256) carrying the target URL
//! - Atomic click counting in Redis, one increment per successful redirect
//! - Batch link creation and batch statistics with strict input ordering
//! - In-memory counter store fallback for Redis-less development
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SIGNING_KEY="change-me"
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::counter::{CounterStore, StoreError, UrlClicks};
    pub use crate::domain::token::{TokenCodec, TokenError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

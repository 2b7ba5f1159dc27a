//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the token codec
//! and the counter store, and provides a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Batch redirect link creation
//! - [`services::stats_service::StatsService`] - Click count retrieval

pub mod services;

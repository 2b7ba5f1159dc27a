//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Counter store implementations (Redis and in-memory)

pub mod store;

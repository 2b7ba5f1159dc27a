//! Helper functions shared across handlers.
//!
//! - [`host`] - Host extraction from HTTP headers

pub mod host;

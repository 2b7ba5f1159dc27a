//! Counter store contract for click counts.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a counter store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached, including after internal retries.
    #[error("counter store unavailable: {0}")]
    Unavailable(String),

    /// No counter exists for the key. A URL that was never redirected has
    /// no entry; reads for it fail rather than report zero.
    #[error("no redirect count recorded for {0}")]
    KeyNotFound(String),
}

/// Click total for a single target URL.
///
/// The count is kept in the store's string form since that is what the
/// stats contract reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlClicks {
    pub url: String,
    pub redirects: String,
}

/// Key-value store holding click counts, keyed by target URL.
///
/// Counters start implicitly at zero and only ever grow. All cross-request
/// coordination lives here: implementations must serialize concurrent
/// increments on the same key so no update is lost.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisCounterStore`] - production Redis store
/// - [`crate::infrastructure::store::MemoryCounterStore`] - in-process store
///   for tests and Redis-less development
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increments the counter for `key`, creating it at zero
    /// first if absent, and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store cannot be reached.
    async fn incr(&self, key: &str) -> Result<i64, StoreError>;

    /// Returns the current counter value for `key` as a string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyNotFound`] if the key has never been
    /// incremented, [`StoreError::Unavailable`] if the store cannot be
    /// reached.
    async fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Checks whether the store backend is reachable.
    ///
    /// Used by the health check endpoint.
    async fn health_check(&self) -> bool;
}

//! In-process counter store for tests and Redis-less development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::counter::{CounterStore, StoreError};

/// Counter store holding counts in a process-local map.
///
/// Behaves like the Redis store for the contract that matters: increments
/// are atomic (serialized through the mutex) and a never-incremented key is
/// reported as [`StoreError::KeyNotFound`] on read. Counts do not survive a
/// restart.
///
/// # Use Cases
///
/// - Integration tests that need observable counts without Redis
/// - Development environments where `REDIS_URL` is not configured
#[derive(Default)]
pub struct MemoryCounterStore {
    counts: Mutex<HashMap<String, i64>>,
}

impl MemoryCounterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryCounterStore (counts are not persisted)");
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn incr(&self, key: &str) -> Result<i64, StoreError> {
        let mut counts = self.counts.lock().unwrap();
        let count = counts.entry(key.to_owned()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        let counts = self.counts.lock().unwrap();
        counts
            .get(key)
            .map(|count| count.to_string())
            .ok_or_else(|| StoreError::KeyNotFound(key.to_owned()))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_incr_starts_at_zero() {
        let store = MemoryCounterStore::new();

        assert_eq!(store.incr("http://a.com").await.unwrap(), 1);
        assert_eq!(store.incr("http://a.com").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_absent_key_is_error() {
        let store = MemoryCounterStore::new();

        let result = store.get("http://never-clicked.com").await;
        assert!(matches!(result, Err(StoreError::KeyNotFound(_))));
    }

    #[tokio::test]
    async fn test_get_returns_string_count() {
        let store = MemoryCounterStore::new();

        store.incr("http://a.com").await.unwrap();
        store.incr("http://a.com").await.unwrap();

        assert_eq!(store.get("http://a.com").await.unwrap(), "2");
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        use std::sync::Arc;

        let store = Arc::new(MemoryCounterStore::new());

        let mut handles = Vec::new();
        for _ in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    store.incr("http://a.com").await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.get("http://a.com").await.unwrap(), "1000");
    }
}

//! Redis-backed counter store implementation.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info, warn};

use crate::domain::counter::{CounterStore, StoreError};

/// Interval between retry attempts on a failed Redis command.
const RETRY_INTERVAL_MS: u64 = 100;

/// Counter store backed by Redis `INCR`/`GET`.
///
/// Uses `ConnectionManager` for connection reuse and reconnection. Transient
/// command failures are retried a bounded number of times before an error
/// surfaces to the caller.
pub struct RedisCounterStore {
    client: ConnectionManager,
    max_retries: usize,
}

impl RedisCounterStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `max_retries` - retry attempts per command before surfacing an error;
    ///   controlled via the `STORE_MAX_RETRIES` env var
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, max_retries: usize) -> Result<Self, StoreError> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            max_retries,
        })
    }

    fn retry_strategy(&self) -> impl Iterator<Item = std::time::Duration> {
        FixedInterval::from_millis(RETRY_INTERVAL_MS).take(self.max_retries)
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn incr(&self, key: &str) -> Result<i64, StoreError> {
        let count = Retry::spawn(self.retry_strategy(), || {
            let mut conn = self.client.clone();
            let key = key.to_owned();
            async move { conn.incr::<_, _, i64>(&key, 1i64).await }
        })
        .await
        .map_err(|e| {
            warn!("Redis INCR error for {}: {}", key, e);
            StoreError::Unavailable(e.to_string())
        })?;

        debug!("INCR {} -> {}", key, count);
        Ok(count)
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        let value = Retry::spawn(self.retry_strategy(), || {
            let mut conn = self.client.clone();
            let key = key.to_owned();
            async move { conn.get::<_, Option<String>>(&key).await }
        })
        .await
        .map_err(|e| {
            warn!("Redis GET error for {}: {}", key, e);
            StoreError::Unavailable(e.to_string())
        })?;

        value.ok_or_else(|| StoreError::KeyNotFound(key.to_owned()))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

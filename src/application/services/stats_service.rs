//! Click statistics over batches of target URLs.

use std::sync::Arc;

use crate::domain::counter::{CounterStore, UrlClicks};
use crate::error::AppError;

/// Service reading click counts for batches of target URLs.
pub struct StatsService {
    store: Arc<dyn CounterStore>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    /// Reads the click count for each URL, in input order.
    ///
    /// One store read per URL, fully sequential, no pipelining. Fail-fast:
    /// the first failed read aborts the whole batch with no partial results.
    /// A URL that was never redirected has no stored counter and fails the
    /// batch the same way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on the first unreadable count.
    pub async fn read_stats(&self, urls: Vec<String>) -> Result<Vec<UrlClicks>, AppError> {
        let mut stats = Vec::with_capacity(urls.len());

        for url in urls {
            let redirects = self.store.get(&url).await?;
            stats.push(UrlClicks { url, redirects });
        }

        Ok(stats)
    }
}

//! Batch creation of redirect links.

use std::sync::Arc;

use crate::domain::token::TokenCodec;
use crate::error::AppError;

/// Service turning batches of target URLs into redirect links.
///
/// Each link is the externally-observed host plus the signed token in the
/// `event` query parameter: `{host}/?event={token}`.
pub struct LinkService {
    codec: Arc<TokenCodec>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Creates one redirect link per target URL, in input order.
    ///
    /// Fail-fast: the first signing failure aborts the whole batch and no
    /// partial list is returned; the caller must resubmit everything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Token`] if signing any URL fails.
    pub fn create_links(&self, host: &str, urls: &[String]) -> Result<Vec<String>, AppError> {
        let mut links = Vec::with_capacity(urls.len());

        for url in urls {
            let token = self.codec.encode(url)?;
            links.push(format!("{host}/?event={token}"));
        }

        Ok(links)
    }
}

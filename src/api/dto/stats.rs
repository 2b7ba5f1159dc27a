//! DTOs for the statistics endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::counter::UrlClicks;

/// Request for click counts of one or more target URLs.
#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    pub urls: Vec<String>,
}

/// Response with one entry per input URL, in input order.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: Vec<UrlStat>,
}

/// Click count for a single URL. The count is reported as a string.
#[derive(Debug, Serialize)]
pub struct UrlStat {
    pub url: String,
    pub redirects: String,
}

impl From<UrlClicks> for UrlStat {
    fn from(clicks: UrlClicks) -> Self {
        Self {
            url: clicks.url,
            redirects: clicks.redirects,
        }
    }
}

//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

/// Request to create redirect links for one or more target URLs.
///
/// The URLs are opaque identifiers; they are signed as-is, never parsed.
#[derive(Debug, Deserialize)]
pub struct MakeRequest {
    pub urls: Vec<String>,
}

/// Response with one redirect link per input URL, in input order.
#[derive(Debug, Serialize)]
pub struct MakeResponse {
    pub redirect_url: Vec<String>,
}

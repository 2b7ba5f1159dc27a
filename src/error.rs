//! Application error type and HTTP boundary mapping.
//!
//! Every failure collapses to the same shape at the boundary: HTTP 500 with
//! a plain-text reason. Clients get a human-readable string, never a
//! structured error body, and the service never retries on their behalf
//! (retries, if any, live inside the counter store client).

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::counter::StoreError;
use crate::domain::token::TokenError;

/// Top-level error for request handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// The `event` query parameter was absent or empty.
    #[error("empty event param")]
    MissingToken,

    /// The request carried no usable `Host` header to build links from.
    #[error("missing or invalid Host header")]
    MissingHost,

    /// The request body could not be decoded as JSON.
    #[error("invalid request body: {0}")]
    Decode(String),

    /// Token signing or verification failed.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// The counter store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Decode(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let reason = self.to_string();
        tracing::warn!("request failed: {reason}");
        (StatusCode::INTERNAL_SERVER_ERROR, reason).into_response()
    }
}

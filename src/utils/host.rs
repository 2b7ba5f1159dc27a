//! Host extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

use crate::error::AppError;

/// Extracts the externally-observed host from the `Host` header.
///
/// The value is returned verbatim, port included: the produced redirect
/// links must point back at the address the client actually reached.
///
/// # Errors
///
/// Returns [`AppError::MissingHost`] if the header is absent or not valid
/// UTF-8.
pub fn host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get(header::HOST)
        .ok_or(AppError::MissingHost)?
        .to_str()
        .map(str::to_owned)
        .map_err(|_| AppError::MissingHost)
}

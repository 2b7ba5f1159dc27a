//! Handler for batch redirect link creation.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::HeaderMap};

use crate::api::dto::make::{MakeRequest, MakeResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::host::host_from_headers;

/// Creates signed redirect links for one or more target URLs.
///
/// # Endpoint
///
/// `POST /make`
///
/// # Request Body
///
/// ```json
/// {"urls": ["https://example.com", "https://example.org"]}
/// ```
///
/// # Response
///
/// ```json
/// {"redirect_url": ["s.example.com/?event=<token>", "..."]}
/// ```
///
/// Links point at the host the request arrived on, so the response is
/// valid for whatever address the service is reachable under. Output order
/// matches input order.
///
/// # Errors
///
/// Returns 500 with a plain-text reason on a malformed JSON body, a missing
/// `Host` header, or a signing failure. The batch is fail-fast: nothing is
/// returned for a batch that failed part-way.
pub async fn make_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<MakeRequest>, JsonRejection>,
) -> Result<Json<MakeResponse>, AppError> {
    let Json(payload) = payload?;
    let host = host_from_headers(&headers)?;

    let redirect_url = state.link_service.create_links(&host, &payload.urls)?;

    Ok(Json(MakeResponse { redirect_url }))
}

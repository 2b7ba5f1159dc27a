//! Handler for batch click statistics.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::stats::{StatsRequest, StatsResponse, UrlStat};
use crate::error::AppError;
use crate::state::AppState;

/// Returns click counts for one or more target URLs.
///
/// # Endpoint
///
/// `POST /stats`
///
/// # Request Body
///
/// ```json
/// {"urls": ["https://example.com"]}
/// ```
///
/// # Response
///
/// ```json
/// {"stats": [{"url": "https://example.com", "redirects": "1"}]}
/// ```
///
/// Output order matches input order.
///
/// # Errors
///
/// Returns 500 with a plain-text reason on a malformed JSON body or when
/// any count cannot be read. A URL that was never redirected has no stored
/// counter and fails the whole batch; no partial results are returned.
pub async fn stats_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatsRequest>, JsonRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Json(payload) = payload?;

    let stats = state.stats_service.read_stats(payload.urls).await?;

    Ok(Json(StatsResponse {
        stats: stats.into_iter().map(UrlStat::from).collect(),
    }))
}

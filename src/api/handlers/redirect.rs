//! Handler for signed-token redirects.

use axum::{
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for the redirect endpoint.
#[derive(Debug, Deserialize)]
pub struct RedirectParams {
    pub event: Option<String>,
}

/// Validates a link token, records the click, and redirects.
///
/// # Endpoint
///
/// `GET /?event=<token>`
///
/// # Request Flow
///
/// 1. Require a non-empty `event` parameter
/// 2. Verify and decode the token to the target URL
/// 3. Atomically increment the click count for that URL
/// 4. Return 307 Temporary Redirect (method preserved, never rewritten to GET)
///
/// No increment happens before step 3 succeeds, and exactly one happens per
/// successful redirect; a request that fails earlier leaves the count
/// untouched.
///
/// # Errors
///
/// Returns 500 with a plain-text reason if the parameter is missing, the
/// token does not verify, or the counter store call fails.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Query(params): Query<RedirectParams>,
) -> Result<Redirect, AppError> {
    let event = params
        .event
        .filter(|event| !event.is_empty())
        .ok_or(AppError::MissingToken)?;

    let url = state.codec.decode(&event)?;

    let count = state.store.incr(&url).await?;
    debug!("redirect to {} (click #{})", url, count);

    Ok(Redirect::temporary(&url))
}

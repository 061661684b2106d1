//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL and counts the hit.
///
/// # Endpoint
///
/// `GET /r/{short_id}`
///
/// # Response
///
/// `302 Found` with the target in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state.link_service.redirect_target(&short_id).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]).into_response())
}

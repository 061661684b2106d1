//! Handler for resolving a short code without redirecting.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the target URL of a short code. Does not count a hit.
///
/// # Endpoint
///
/// `GET /api/resolve/{short_id}`
///
/// # Response
///
/// ```json
/// { "url": "https://example.com", "short_id": "aB3dE5f" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn resolve_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let url = state.link_service.resolve(&short_id).await?;

    Ok(Json(ResolveResponse { url, short_id }))
}

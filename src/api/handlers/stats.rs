//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns hit count and expiry state for a short link.
///
/// Works for expired links too, so their history stays visible.
///
/// # Endpoint
///
/// `GET /stats/{short_id}`
///
/// # Response
///
/// ```json
/// {
///   "short_id": "aB3dE5f",
///   "target_url": "https://example.com",
///   "hit_count": 1,
///   "created_at": "2025-01-01T12:00:00Z",
///   "expires_at": "2025-01-01T13:00:00Z",
///   "expired": false,
///   "ttl_seconds_remaining": 3599
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.stats(&short_id).await?;

    Ok(Json(stats.into()))
}

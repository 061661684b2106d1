//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::{resolve_origin, short_url};

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// JSON or `application/x-www-form-urlencoded`:
///
/// ```json
/// { "target_url": "https://example.com", "ttl": 3600 }
/// ```
///
/// `ttl` is optional; without it the link never expires.
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "short_id": "aB3dE5f",
///   "short_url": "http://localhost:3000/r/aB3dE5f",
///   "target_url": "https://example.com",
///   "created_at": "2025-01-01T12:00:00Z",
///   "expires_at": "2025-01-01T13:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body, URL or TTL is invalid.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let origin = resolve_origin(state.public_base_url.as_deref(), &headers)?;

    let link = state
        .link_service
        .create(&payload.target_url, payload.ttl)
        .await?;

    let short_url = short_url(&origin, &link.short_id);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse::new(link, short_url)),
    ))
}

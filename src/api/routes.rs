//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`              - Create a short link
/// - `GET  /resolve/{short_id}`   - Look up a target without counting a hit
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/resolve/{short_id}", get(resolve_handler))
}

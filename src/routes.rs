//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{short_id}`     - Redirect to the target, counting a hit
//! - `GET  /stats/{short_id}` - Hit count and expiry state
//! - `GET  /health`           - Storage health check
//! - `/api/*`                 - JSON API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with state and tracing applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/r/{short_id}", get(redirect_handler))
        .route("/stats/{short_id}", get(stats_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped so that
/// `/stats/abc/` and `/stats/abc` hit the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

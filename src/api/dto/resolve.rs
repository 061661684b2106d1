//! DTOs for the resolve endpoint.

use serde::Serialize;

/// Target of a short code, returned without redirecting.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub url: String,
    pub short_id: String,
}

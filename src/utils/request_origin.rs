//! Public origin resolution for building short URLs.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resolves the origin (`scheme://host[:port]`) that short URLs are built on.
///
/// A configured public base URL always wins. Otherwise the origin comes from
/// the request: the `Host` header is kept verbatim (including any port), and
/// the scheme is `https` only when `X-Forwarded-Proto: https` is present.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and the
/// `Host` header is missing or not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// assert_eq!(resolve_origin(None, &headers).unwrap(), "http://sho.rt:8080");
/// assert_eq!(resolve_origin(Some("https://s.io/"), &headers).unwrap(), "https://s.io");
/// ```
pub fn resolve_origin(public_base_url: Option<&str>, headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(base) = public_base_url {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    let scheme = match headers.get(FORWARDED_PROTO).and_then(|v| v.to_str().ok()) {
        Some(proto) if proto.trim().eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    Ok(format!("{scheme}://{host}"))
}

/// Builds the public redirect URL for a short code.
pub fn short_url(origin: &str, short_id: &str) -> String {
    format!("{}/r/{}", origin.trim_end_matches('/'), short_id)
}

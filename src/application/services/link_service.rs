//! Link creation, resolution, redirect and statistics service.

use std::sync::Arc;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde_json::json;

use crate::domain::entities::{Link, LinkStats, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::url_validator::validate_target_url;

/// Upper bound on a link's time-to-live: ten years.
pub const MAX_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// Attempts at finding a free short code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service owning the short link lifecycle.
///
/// Generic over the store so the same rules run against PostgreSQL, the
/// in-memory store, or a mock. Expiry is always evaluated against a fresh
/// clock reading; nothing about it is stored.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    code_length: usize,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service using the default code length.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_code_length(link_repository, DEFAULT_CODE_LENGTH)
    }

    /// Creates a new link service generating codes of `code_length` characters.
    pub fn with_code_length(link_repository: Arc<L>, code_length: usize) -> Self {
        Self {
            link_repository,
            code_length,
        }
    }

    /// Creates a short link for `target_url`, optionally expiring after
    /// `ttl_seconds`.
    ///
    /// # Code Generation
    ///
    /// A random code is inserted directly; if the store reports a
    /// [`AppError::Conflict`] a new code is drawn, up to 10 times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `target_url` is empty or not an absolute HTTP(S) URL
    /// - `ttl_seconds` is zero, negative or longer than [`MAX_TTL_SECONDS`]
    ///
    /// Returns [`AppError::Internal`] if no free code was found or the store fails.
    pub async fn create(&self, target_url: &str, ttl_seconds: Option<i64>) -> Result<Link, AppError> {
        let target_url = validate_target_url(target_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "field": "target_url" }))
        })?;
        let ttl = validate_ttl(ttl_seconds)?;

        // Postgres keeps microseconds; truncating keeps expires_at - created_at exact.
        let created_at = Utc::now().trunc_subsecs(6);
        let expires_at = ttl.map(|ttl| created_at + ttl);

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                short_id: generate_code(self.code_length),
                target_url: target_url.clone(),
                created_at,
                expires_at,
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(
                        short_id = %link.short_id,
                        expires_at = ?link.expires_at,
                        "Short link created"
                    );
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "Short code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_CODE_ATTEMPTS,
            "Failed to generate unique short code"
        );
        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its target URL without counting a hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and [`AppError::Gone`]
    /// for expired links.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self.get_live_link(code, Utc::now()).await?;
        Ok(link.target_url)
    }

    /// Resolves a short code for a redirect, counting one hit.
    ///
    /// The increment is performed by the store as a single atomic update, so
    /// concurrent redirects are all counted.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`]. A link that expires between the lookup and
    /// the increment is reported as [`AppError::Gone`] and not counted.
    pub async fn redirect_target(&self, code: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let link = self.get_live_link(code, now).await?;

        match self.link_repository.record_hit(code, now).await? {
            Some(hit_count) => {
                tracing::debug!(short_id = %code, hit_count, "Redirect recorded");
                Ok(link.target_url)
            }
            None => Err(expired(code)),
        }
    }

    /// Returns statistics for a link, whether or not it has expired.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub async fn stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self.get_link(code).await?;
        Ok(LinkStats::at(link, Utc::now()))
    }

    /// Number of stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "short_id": code })))
    }

    async fn get_live_link(&self, code: &str, now: DateTime<Utc>) -> Result<Link, AppError> {
        let link = self.get_link(code).await?;

        if link.is_expired_at(now) {
            return Err(expired(code));
        }

        Ok(link)
    }
}

fn expired(code: &str) -> AppError {
    AppError::gone("Short URL expired", json!({ "short_id": code }))
}

/// Checks an optional TTL and converts it to a duration.
fn validate_ttl(ttl_seconds: Option<i64>) -> Result<Option<Duration>, AppError> {
    match ttl_seconds {
        None => Ok(None),
        Some(ttl) if ttl <= 0 => Err(AppError::bad_request(
            "ttl must be a positive number of seconds",
            json!({ "field": "ttl", "value": ttl }),
        )),
        Some(ttl) if ttl > MAX_TTL_SECONDS => Err(AppError::bad_request(
            format!("ttl must not exceed {MAX_TTL_SECONDS} seconds"),
            json!({ "field": "ttl", "value": ttl }),
        )),
        Some(ttl) => Ok(Some(Duration::seconds(ttl))),
    }
}

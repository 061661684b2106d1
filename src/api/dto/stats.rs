//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::LinkStats;

/// Statistics for a single short link.
///
/// `expires_at` and `ttl_seconds_remaining` serialize as `null` when absent.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_id: String,
    pub target_url: String,
    pub hit_count: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: bool,
    pub ttl_seconds_remaining: Option<i64>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            short_id: stats.short_id,
            target_url: stats.target_url,
            hit_count: stats.hit_count,
            created_at: stats.created_at,
            expires_at: stats.expires_at,
            expired: stats.expired,
            ttl_seconds_remaining: stats.ttl_seconds_remaining,
        }
    }
}

//! Statistics view of a link, evaluated at a single instant.

use chrono::{DateTime, Utc};

use super::Link;

/// Snapshot of a link's state as reported by the stats operation.
///
/// `expired` and `ttl_seconds_remaining` are derived from the same `now`
/// sample, so they never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub short_id: String,
    pub target_url: String,
    pub hit_count: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: bool,
    pub ttl_seconds_remaining: Option<i64>,
}

impl LinkStats {
    /// Builds the view for `link` as observed at `now`.
    pub fn at(link: Link, now: DateTime<Utc>) -> Self {
        let expired = link.is_expired_at(now);
        let ttl_seconds_remaining = link.ttl_seconds_remaining_at(now);

        Self {
            short_id: link.short_id,
            target_url: link.target_url,
            hit_count: link.hit_count,
            created_at: link.created_at,
            expires_at: link.expires_at,
            expired,
            ttl_seconds_remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_stats_for_live_link() {
        let now = Utc::now();
        let link = Link::new(
            "live123".to_string(),
            "https://example.com".to_string(),
            now,
            Some(now + Duration::seconds(3600)),
            4,
        );

        let stats = LinkStats::at(link, now + Duration::seconds(1));

        assert!(!stats.expired);
        assert_eq!(stats.hit_count, 4);
        assert_eq!(stats.ttl_seconds_remaining, Some(3599));
    }

    #[test]
    fn test_stats_for_expired_link() {
        let now = Utc::now();
        let link = Link::new(
            "old1234".to_string(),
            "https://example.com".to_string(),
            now - Duration::seconds(10),
            Some(now - Duration::seconds(5)),
            2,
        );

        let stats = LinkStats::at(link, now);

        assert!(stats.expired);
        assert_eq!(stats.ttl_seconds_remaining, None);
        assert!(stats.expires_at.is_some());
    }

    #[test]
    fn test_stats_for_permanent_link() {
        let now = Utc::now();
        let link = Link::new(
            "forever".to_string(),
            "https://example.com".to_string(),
            now,
            None,
            0,
        );

        let stats = LinkStats::at(link, now);

        assert!(!stats.expired);
        assert_eq!(stats.expires_at, None);
        assert_eq!(stats.ttl_seconds_remaining, None);
    }
}

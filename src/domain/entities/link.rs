//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `created_at` and `expires_at` are fixed at creation. `hit_count` only
/// ever grows, one step per successful redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub short_id: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub hit_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        short_id: String,
        target_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        hit_count: i64,
    ) -> Self {
        Self {
            short_id,
            target_url,
            created_at,
            expires_at,
            hit_count,
        }
    }

    /// Returns true if the link is expired at the given instant.
    ///
    /// A link expires exactly at `expires_at`, not one tick later.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whole seconds left before expiry, or `None` for links that never
    /// expire or are already expired.
    pub fn ttl_seconds_remaining_at(&self, now: DateTime<Utc>) -> Option<i64> {
        match self.expires_at {
            Some(expires_at) if now < expires_at => Some((expires_at - now).num_seconds()),
            _ => None,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_id: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewLink {
    /// Materializes the record as stored, with a zero hit count.
    pub fn into_link(self) -> Link {
        Link::new(
            self.short_id,
            self.target_url,
            self.created_at,
            self.expires_at,
            0,
        )
    }
}

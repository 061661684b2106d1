//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL, sent as JSON or as a urlencoded form.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten.
    #[serde(default)]
    #[validate(length(min = 1, message = "target_url is required"))]
    pub target_url: String,

    /// Optional lifetime in seconds, counted from creation.
    ///
    /// Accepts an integer or a numeric string; a blank string (an empty form
    /// field) means no expiry.
    #[serde(default, alias = "ttl_seconds", deserialize_with = "deserialize_ttl")]
    #[validate(range(min = 1, message = "ttl must be a positive number of seconds"))]
    pub ttl: Option<i64>,
}

fn deserialize_ttl<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTtl {
        Number(i64),
        Text(String),
    }

    match Option::<RawTtl>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawTtl::Number(ttl)) => Ok(Some(ttl)),
        Some(RawTtl::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("ttl must be an integer, got '{text}'")))
        }
    }
}

/// Response for a newly created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
    pub short_url: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortenResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            short_id: link.short_id,
            short_url,
            target_url: link.target_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}

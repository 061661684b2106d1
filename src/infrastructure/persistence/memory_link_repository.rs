//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link repository backed by a `HashMap` behind an async `RwLock`.
///
/// Inserts and hit increments take the write lock, which makes each of them
/// atomic with respect to every other operation on the store. Contents are
/// lost when the process exits.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fully-formed link, replacing any existing one with the same
    /// code. Intended for seeding fixtures such as already-expired links.
    pub async fn insert(&self, link: Link) {
        self.links
            .write()
            .await
            .insert(link.short_id.clone(), link);
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&new_link.short_id) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_pkey" }),
            ));
        }

        let link = new_link.into_link();
        links.insert(link.short_id.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn record_hit(&self, code: &str, now: DateTime<Utc>) -> Result<Option<i64>, AppError> {
        let mut links = self.links.write().await;

        Ok(links
            .get_mut(code)
            .filter(|link| !link.is_expired_at(now))
            .map(|link| {
                link.hit_count += 1;
                link.hit_count
            }))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.read().await.len() as i64)
    }
}

//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape of the `links` table.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    short_id: String,
    target_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    hit_count: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.short_id,
            row.target_url,
            row.created_at,
            row.expires_at,
            row.hit_count,
        )
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Short code uniqueness is enforced by the primary key, so concurrent
/// inserts of the same code cannot both succeed.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_id, target_url, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING short_id, target_url, created_at, expires_at, hit_count
            "#,
        )
        .bind(&new_link.short_id)
        .bind(&new_link.target_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT short_id, target_url, created_at, expires_at, hit_count
            FROM links
            WHERE short_id = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn record_hit(&self, code: &str, now: DateTime<Utc>) -> Result<Option<i64>, AppError> {
        let hit_count = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE links
            SET hit_count = hit_count + 1
            WHERE short_id = $1
              AND (expires_at IS NULL OR expires_at > $2)
            RETURNING hit_count
            "#,
        )
        .bind(code)
        .bind(now)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(hit_count)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

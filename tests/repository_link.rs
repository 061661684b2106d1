//! PostgreSQL repository tests. Run with `cargo test -- --ignored` against a
//! database named by `DATABASE_URL`.

use chrono::{Duration, SubsecRound, Utc};
use link_shortener::domain::entities::NewLink;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_link(code: &str, ttl: Option<i64>) -> NewLink {
    let created_at = Utc::now().trunc_subsecs(6);
    NewLink {
        short_id: code.to_string(),
        target_url: "https://example.com".to_string(),
        created_at,
        expires_at: ttl.map(|s| created_at + Duration::seconds(s)),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
async fn test_create_and_find_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let input = new_link("abc1234", Some(3600));

    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.short_id, "abc1234");
    assert_eq!(created.hit_count, 0);
    assert_eq!(created.created_at, input.created_at);
    assert_eq!(created.expires_at, input.expires_at);

    let found = repo.find_by_code("abc1234").await.unwrap().unwrap();
    assert_eq!(found.target_url, "https://example.com");
    assert_eq!(found.expires_at, input.expires_at);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
async fn test_find_missing_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("missing").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
async fn test_duplicate_code_is_conflict(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("dup1234", None)).await.unwrap();

    let result = repo.create(new_link("dup1234", None)).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
async fn test_record_hit_increments(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("hit1234", None)).await.unwrap();

    assert_eq!(repo.record_hit("hit1234", Utc::now()).await.unwrap(), Some(1));
    assert_eq!(repo.record_hit("hit1234", Utc::now()).await.unwrap(), Some(2));

    let link = repo.find_by_code("hit1234").await.unwrap().unwrap();
    assert_eq!(link.hit_count, 2);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
async fn test_record_hit_skips_expired_and_missing(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo.create(new_link("exp1234", Some(60))).await.unwrap();
    let after_expiry = link.expires_at.unwrap();

    assert_eq!(repo.record_hit("exp1234", after_expiry).await.unwrap(), None);
    assert_eq!(repo.record_hit("missing", Utc::now()).await.unwrap(), None);

    let link = repo.find_by_code("exp1234").await.unwrap().unwrap();
    assert_eq!(link.hit_count, 0);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
async fn test_concurrent_hits_are_not_lost(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    repo.create(new_link("con1234", None)).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.record_hit("con1234", Utc::now()).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_some());
    }

    let link = repo.find_by_code("con1234").await.unwrap().unwrap();
    assert_eq!(link.hit_count, 20);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (set DATABASE_URL)"]
async fn test_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    assert_eq!(repo.count().await.unwrap(), 0);

    repo.create(new_link("one1234", None)).await.unwrap();
    repo.create(new_link("two1234", Some(10))).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}

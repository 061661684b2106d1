#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{Duration, Utc};
use link_shortener::application::services::LinkService;
use link_shortener::domain::entities::Link;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::routes::router;
use link_shortener::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";

/// State backed by a fresh in-memory store, with a fixed public base URL.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    create_test_state_with_base(Some(BASE_URL))
}

pub fn create_test_state_with_base(
    public_base_url: Option<&str>,
) -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let link_repository: Arc<dyn LinkRepository> = repo.clone();
    let link_service = Arc::new(LinkService::new(link_repository));
    let state = AppState::new(link_service, public_base_url.map(str::to_string));

    (state, repo)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) {
    repo.insert(Link::new(
        code.to_string(),
        url.to_string(),
        Utc::now(),
        None,
        0,
    ))
    .await;
}

pub async fn create_expired_link(repo: &InMemoryLinkRepository, code: &str, url: &str) {
    let created_at = Utc::now() - Duration::hours(2);
    repo.insert(Link::new(
        code.to_string(),
        url.to_string(),
        created_at,
        Some(created_at + Duration::hours(1)),
        5,
    ))
    .await;
}

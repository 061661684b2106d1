mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use link_shortener::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "abc1234", "https://example.com").await;

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri("/stats/abc1234/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_redirect_through_app_router() {
    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "abc1234", "https://example.com/x").await;

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri("/r/abc1234/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/x"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let (state, _repo) = common::create_test_state();

    let response = app_router(state)
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

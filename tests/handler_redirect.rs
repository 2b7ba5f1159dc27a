mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use eventlink::api::handlers::redirect_handler;
use eventlink::domain::counter::{CounterStore, StoreError};

fn redirect_app(state: eventlink::AppState) -> Router {
    Router::new().route("/", get(redirect_handler)).with_state(state)
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let token = common::test_codec().encode("http://a.com").unwrap();

    let response = server.get(&format!("/?event={token}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "http://a.com");
    assert_eq!(store.get("http://a.com").await.unwrap(), "1");
}

#[tokio::test]
async fn test_two_redirects_count_twice() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let token = common::test_codec().encode("http://a.com").unwrap();

    for _ in 0..2 {
        let response = server.get(&format!("/?event={token}")).await;
        assert_eq!(response.status_code(), 307);
        assert_eq!(response.header("location"), "http://a.com");
    }

    assert_eq!(store.get("http://a.com").await.unwrap(), "2");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/?event=garbage").await;

    assert_eq!(response.status_code(), 500);
    assert!(response.text().contains("token parse fail or invalid"));

    // Failed validation must leave the counts untouched.
    assert!(matches!(
        store.get("http://a.com").await,
        Err(StoreError::KeyNotFound(_))
    ));
}

#[tokio::test]
async fn test_missing_event_param() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text(), "empty event param");
}

#[tokio::test]
async fn test_empty_event_param() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/?event=").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text(), "empty event param");
}

#[tokio::test]
async fn test_token_signed_with_other_key_rejected() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let token = eventlink::domain::token::TokenCodec::new("another-key")
        .encode("http://a.com")
        .unwrap();

    let response = server.get(&format!("/?event={token}")).await;

    assert_eq!(response.status_code(), 500);
}

#[tokio::test]
async fn test_token_replayable_without_limit() {
    // Tokens carry no expiry; any issued token keeps working.
    let (state, store) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let token = common::test_codec().encode("http://a.com").unwrap();

    for i in 1..=5 {
        let response = server.get(&format!("/?event={token}")).await;
        assert_eq!(response.status_code(), 307);
        assert_eq!(store.get("http://a.com").await.unwrap(), i.to_string());
    }
}

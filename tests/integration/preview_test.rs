//! Integration tests for the token-gated preview route.

mod helpers;

use std::time::Duration;

use folio_auth::{PreviewSecret, TokenCodec};
use folio_core::error::ErrorKind;
use helpers::{MemorySource, TestApp, TestResponse, now_ms};
use http::StatusCode;

fn assert_hardened(response: &TestResponse) {
    assert_eq!(response.header("x-frame-options"), "SAMEORIGIN");
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(
        response.header("referrer-policy"),
        "strict-origin-when-cross-origin"
    );
    assert_eq!(
        response.header("cache-control"),
        "private, no-cache, no-store, must-revalidate"
    );
}

fn tamper_last_char(token: &str) -> String {
    let mut chars: Vec<char> = token.chars().collect();
    let last = chars.len() - 1;
    chars[last] = if chars[last] == '0' { '1' } else { '0' };
    chars.into_iter().collect()
}

#[tokio::test]
async fn test_valid_token_serves_html() {
    let app = TestApp::new();
    let token = app.issue("coll_draft");

    let response = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), "text/html; charset=utf-8");
    assert_eq!(
        response.text,
        "<h1>Draft collection</h1><p>Not yet published.</p>"
    );
    assert_hardened(&response);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new();

    for path in [
        "/preview/coll_draft",
        "/preview/coll_draft?token=",
        "/preview/coll_draft?other=1",
    ] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
        assert_hardened(&response);
    }
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized_without_echo() {
    let app = TestApp::new();
    let garbage = "not-a-real-token-zz9";

    let response = app
        .get(&format!("/preview/coll_draft?token={garbage}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.text.contains(garbage));
    assert!(response.header("content-type").starts_with("text/plain"));
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new();
    let ttl_ms = app.state.codec.ttl().as_millis() as u64;
    let token = app.issue_at("coll_draft", now_ms() - ttl_ms - 60_000);

    let response = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_signature_is_unauthorized() {
    let app = TestApp::new();
    let token = tamper_last_char(&app.issue("coll_draft"));

    let response = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.text.contains(&token));
}

#[tokio::test]
async fn test_token_from_rotated_secret_is_unauthorized() {
    let app = TestApp::new();
    let old_secret = PreviewSecret::new("the-secret-before-rotation-0123456789").unwrap();
    let old_codec = TokenCodec::with_default_ttl(&old_secret).unwrap();
    let token = old_codec.issue("coll_draft").unwrap().into_string();

    let response = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_other_subject_is_forbidden() {
    let app = TestApp::new();
    let token = app.issue("coll_other");

    let response = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_hardened(&response);
}

#[tokio::test]
async fn test_unknown_collection_is_not_found() {
    let app = TestApp::new();
    let token = app.issue("coll_missing");

    let response = app
        .get(&format!("/preview/coll_missing?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_hardened(&response);
}

#[tokio::test]
async fn test_upstream_failure_is_not_found_without_detail() {
    let app = TestApp::with_source(MemorySource::failing(ErrorKind::ExternalService), None);
    let token = app.issue("coll_draft");

    let response = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(!response.text.contains("hunter2"));
    assert!(!response.text.contains("10.0.0.7"));
}

#[tokio::test]
async fn test_overloaded_upstream_is_not_found() {
    let app = TestApp::with_source(MemorySource::failing(ErrorKind::ServiceUnavailable), None);
    let token = app.issue("coll_draft");

    let response = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_hardened(&response);
}

#[tokio::test(start_paused = true)]
async fn test_slow_upstream_is_not_found_with_headers() {
    let app = TestApp::with_config(MemorySource::slow(Duration::from_secs(60)), |config| {
        config.content.timeout_seconds = 1;
        config.server.request_timeout_seconds = 5;
    });
    app.state.config.validate().expect("config should validate");
    let token = app.issue("coll_draft");

    let response = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_hardened(&response);
    assert!(!response.text.contains("Draft collection"));
}

#[tokio::test]
async fn test_internal_failure_is_server_error_without_detail() {
    let app = TestApp::with_source(MemorySource::failing(ErrorKind::Internal), None);
    let token = app.issue("coll_draft");

    let response = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.text.contains("hunter2"));
    assert_hardened(&response);
}

#[tokio::test]
async fn test_share_then_reuse_on_another_collection() {
    let app = TestApp::new();
    let token = app.issue("coll_draft");

    let own = app
        .get(&format!("/preview/coll_draft?token={token}"))
        .await;
    let other = app
        .get(&format!("/preview/coll_other?token={token}"))
        .await;

    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(other.status, StatusCode::FORBIDDEN);
    assert!(!other.text.contains("Other"));
}

//! Integration tests for preview link issuance.

mod helpers;

use folio_core::error::ErrorKind;
use helpers::{ISSUER_KEY, MemorySource, SITE_URL, TestApp};
use http::StatusCode;

#[tokio::test]
async fn test_issue_link_success() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/preview-links",
            Some(serde_json::json!({ "subject_id": "coll_draft" })),
            Some(ISSUER_KEY),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let data = &response.body["data"];
    let token = data["token"].as_str().expect("token");
    assert_eq!(data["subject_id"], "coll_draft");
    assert!(token.starts_with("coll_draft."));
    assert_eq!(
        data["url"],
        format!("{SITE_URL}/preview/coll_draft?token={token}")
    );
    assert!(data["expires_at"].is_string());

    let verified = app.state.codec.verify(token).expect("token verifies");
    assert!(verified.grants("coll_draft"));
}

#[tokio::test]
async fn test_issued_link_opens_preview() {
    let app = TestApp::new();

    let issued = app
        .request(
            "POST",
            "/api/preview-links",
            Some(serde_json::json!({ "subject_id": "coll_draft" })),
            Some(ISSUER_KEY),
        )
        .await;
    let url = issued.body["data"]["url"].as_str().expect("url");
    let path = url.strip_prefix(SITE_URL).expect("site-relative");

    let response = app.get(path).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Draft collection"));
}

#[tokio::test]
async fn test_issue_requires_key() {
    let app = TestApp::new();
    let body = serde_json::json!({ "subject_id": "coll_draft" });

    let missing = app
        .request("POST", "/api/preview-links", Some(body.clone()), None)
        .await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let wrong = app
        .request("POST", "/api/preview-links", Some(body), Some("not-the-key"))
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_issue_disabled_without_key() {
    let app = TestApp::with_source(MemorySource::seeded(), None);

    let response = app
        .request(
            "POST",
            "/api/preview-links",
            Some(serde_json::json!({ "subject_id": "coll_draft" })),
            Some(ISSUER_KEY),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_issue_rejects_bad_subject() {
    let app = TestApp::new();

    for subject in ["", "has.dot", "../admin", "white space"] {
        let response = app
            .request(
                "POST",
                "/api/preview-links",
                Some(serde_json::json!({ "subject_id": subject })),
                Some(ISSUER_KEY),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{subject:?}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_issue_does_not_touch_content_api() {
    let app = TestApp::with_source(
        MemorySource::failing(ErrorKind::ExternalService),
        Some(ISSUER_KEY),
    );

    let response = app
        .request(
            "POST",
            "/api/preview-links",
            Some(serde_json::json!({ "subject_id": "coll_anything" })),
            Some(ISSUER_KEY),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

//! Integration tests for sitemap, robots, search, and health routes.

mod helpers;

use folio_core::error::ErrorKind;
use helpers::{MemorySource, SITE_URL, TestApp};
use http::StatusCode;

#[tokio::test]
async fn test_sitemap_lists_static_and_content_routes() {
    let app = TestApp::new();

    let response = app.get("/sitemap.xml").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("content-type").starts_with("application/xml"));
    for path in [
        "/",
        "/about",
        "/blog/async-rust",
        "/blog/css-grid",
        "/projects/tracer",
        "/blog/tag/rust",
        "/blog/category/engineering",
    ] {
        let loc = format!("<loc>{SITE_URL}{path}</loc>");
        assert!(response.text.contains(&loc), "missing {loc}");
    }
    assert!(!response.text.contains("/preview/"));
}

#[tokio::test]
async fn test_sitemap_survives_content_outage() {
    let app = TestApp::with_source(MemorySource::failing(ErrorKind::ExternalService), None);

    let response = app.get("/sitemap.xml").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains(&format!("<loc>{SITE_URL}/</loc>")));
    assert!(!response.text.contains("/blog/async-rust"));
}

#[tokio::test]
async fn test_robots_txt() {
    let app = TestApp::new();

    let response = app.get("/robots.txt").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("content-type").starts_with("text/plain"));
    assert!(response.text.contains("Disallow: /preview/"));
    assert!(
        response
            .text
            .contains(&format!("Sitemap: {SITE_URL}/sitemap.xml"))
    );
}

#[tokio::test]
async fn test_search_ranks_posts_and_projects() {
    let app = TestApp::new();

    let response = app.get("/api/search?q=rust").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["query"], "rust");

    let hits = response.body["data"]["hits"].as_array().expect("hits");
    let urls: Vec<&str> = hits.iter().filter_map(|h| h["url"].as_str()).collect();
    assert!(urls.contains(&"/blog/async-rust"));
    assert!(urls.contains(&"/projects/tracer"));
    assert!(!urls.contains(&"/blog/css-grid"));
    assert!(hits.iter().any(|h| h["kind"] == "project"));
}

#[tokio::test]
async fn test_search_limit_and_empty_query() {
    let app = TestApp::new();

    let limited = app.get("/api/search?q=rust&limit=1").await;
    assert_eq!(limited.body["data"]["hits"].as_array().map(Vec::len), Some(1));

    let empty = app.get("/api/search?q=").await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body["data"]["hits"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].is_string());
}

//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use folio_api::AppState;
use folio_api::router::build_router;
use folio_core::config::AppConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::traits::ContentSource;
use folio_core::types::{BlogPost, Category, Project, Tag};

/// Secret shared by every test app.
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Issuer key accepted by [`TestApp::new`].
pub const ISSUER_KEY: &str = "issuer-test-key";

/// Public site URL used for generated links.
pub const SITE_URL: &str = "https://folio.test";

/// In-memory content API.
#[derive(Debug, Default)]
pub struct MemorySource {
    /// Collection id to HTML.
    pub collections: HashMap<String, String>,
    /// Blog posts.
    pub posts: Vec<BlogPost>,
    /// Projects.
    pub projects: Vec<Project>,
    /// Tags.
    pub tags: Vec<Tag>,
    /// Categories.
    pub categories: Vec<Category>,
    /// When set, every call fails with this kind of error.
    pub failure: Option<ErrorKind>,
    /// When set, collection fetches stall this long before answering.
    pub delay: Option<Duration>,
}

impl MemorySource {
    /// A source holding a couple of collections, posts, and projects.
    pub fn seeded() -> Self {
        let mut collections = HashMap::new();
        collections.insert(
            "coll_draft".to_string(),
            "<h1>Draft collection</h1><p>Not yet published.</p>".to_string(),
        );
        collections.insert("coll_other".to_string(), "<h1>Other</h1>".to_string());

        Self {
            collections,
            posts: vec![
                post("async-rust", "Async Rust in Practice", &["rust", "async"], "Engineering"),
                post("css-grid", "CSS Grid Tricks", &["css"], "Frontend"),
            ],
            projects: vec![project("tracer", "Tracer", &["Rust", "WASM"])],
            tags: vec![Tag {
                slug: "rust".to_string(),
                name: "Rust".to_string(),
            }],
            categories: vec![Category {
                slug: "engineering".to_string(),
                name: "Engineering".to_string(),
            }],
            failure: None,
            delay: None,
        }
    }

    /// A source whose every call fails with `kind`.
    pub fn failing(kind: ErrorKind) -> Self {
        Self {
            failure: Some(kind),
            ..Self::seeded()
        }
    }

    /// A source whose collection fetches stall for `delay`.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::seeded()
        }
    }

    fn check(&self) -> AppResult<()> {
        match self.failure {
            Some(kind) => Err(AppError::new(
                kind,
                "upstream exploded: db=10.0.0.7 password=hunter2",
            )),
            None => Ok(()),
        }
    }
}

fn post(slug: &str, title: &str, tags: &[&str], category: &str) -> BlogPost {
    BlogPost {
        id: slug.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: Some(category.to_string()),
        published_at: None,
        updated_at: None,
    }
}

fn project(slug: &str, title: &str, stack: &[&str]) -> Project {
    Project {
        id: slug.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        description: None,
        tech_stack: stack.iter().map(|t| t.to_string()).collect(),
        featured: true,
        updated_at: None,
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn collection_html(&self, id: &str) -> AppResult<Option<String>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.check()?;
        Ok(self.collections.get(id).cloned())
    }

    async fn blog_posts(&self) -> AppResult<Vec<BlogPost>> {
        self.check()?;
        Ok(self.posts.clone())
    }

    async fn projects(&self) -> AppResult<Vec<Project>> {
        self.check()?;
        Ok(self.projects.clone())
    }

    async fn tags(&self) -> AppResult<Vec<Tag>> {
        self.check()?;
        Ok(self.tags.clone())
    }

    async fn categories(&self) -> AppResult<Vec<Category>> {
        self.check()?;
        Ok(self.categories.clone())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for issuing tokens directly
    pub state: AppState,
}

impl TestApp {
    /// Create a test application over seeded content with issuance enabled
    pub fn new() -> Self {
        Self::with_source(MemorySource::seeded(), Some(ISSUER_KEY))
    }

    /// Create a test application over the given content source
    pub fn with_source(source: MemorySource, issuer_key: Option<&str>) -> Self {
        Self::with_config(source, |config| {
            config.preview.issuer_key = issuer_key.map(str::to_string);
        })
    }

    /// Create a test application, adjusting the configuration first
    pub fn with_config(source: MemorySource, configure: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::default();
        config.preview.secret = Some(TEST_SECRET.to_string());
        config.site.base_url = SITE_URL.to_string();
        configure(&mut config);

        let state = AppState::new(config, Arc::new(source)).expect("Failed to build state");
        let router = build_router(state.clone());

        Self { router, state }
    }

    /// Issue a token for `subject` through the app's codec
    pub fn issue(&self, subject: &str) -> String {
        self.state
            .codec
            .issue(subject)
            .expect("Failed to issue token")
            .into_string()
    }

    /// Issue a token for `subject` as if it had been minted at `issued_ms`
    pub fn issue_at(&self, subject: &str, issued_ms: u64) -> String {
        self.state
            .codec
            .issue_at(subject, issued_ms)
            .expect("Failed to issue token")
            .into_string()
    }

    /// GET a path without credentials
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None, None).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(key) = bearer {
            req = req.header("Authorization", format!("Bearer {key}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub text: String,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
}

impl TestResponse {
    /// Value of a header as a string, empty when absent
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_millis() as u64
}

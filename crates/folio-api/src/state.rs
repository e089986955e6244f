//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use folio_auth::{BearerKey, PreviewSecret, TokenCodec};
use folio_content::{SearchService, SitemapService};
use folio_core::config::AppConfig;
use folio_core::result::AppResult;
use folio_core::traits::ContentSource;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Preview token codec
    pub codec: Arc<TokenCodec>,
    /// Bearer key for preview link issuance; `None` disables the endpoint
    pub issuer_key: Option<Arc<BearerKey>>,
    /// Remote content source
    pub content: Arc<dyn ContentSource>,
    /// Search over posts and projects
    pub search: Arc<SearchService>,
    /// Sitemap and robots generation
    pub sitemap: Arc<SitemapService>,
}

impl AppState {
    /// Wires state from configuration and a content source.
    ///
    /// Fails when the preview secret is missing.
    pub fn new(config: AppConfig, content: Arc<dyn ContentSource>) -> AppResult<Self> {
        let secret = PreviewSecret::from_config(&config.preview)?;
        let codec = TokenCodec::new(&secret, config.preview.ttl())?;
        let issuer_key = config.preview.issuer_key().map(|k| Arc::new(BearerKey::new(k)));

        let search = SearchService::new(Arc::clone(&content));
        let sitemap = SitemapService::new(Arc::clone(&content), config.site.clone());

        Ok(Self {
            config: Arc::new(config),
            codec: Arc::new(codec),
            issuer_key,
            content,
            search: Arc::new(search),
            sitemap: Arc::new(sitemap),
        })
    }
}

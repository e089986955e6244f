//! Read-only access to the remote content API.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{BlogPost, Category, Project, Tag};

/// Source of site content.
///
/// The production implementation is the HTTP client in `folio-content`;
/// tests substitute an in-memory source.
#[async_trait]
pub trait ContentSource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the rendered HTML of a collection.
    ///
    /// Returns `Ok(None)` when the collection does not exist or has no HTML.
    async fn collection_html(&self, id: &str) -> AppResult<Option<String>>;

    /// List all blog posts.
    async fn blog_posts(&self) -> AppResult<Vec<BlogPost>>;

    /// List all portfolio projects.
    async fn projects(&self) -> AppResult<Vec<Project>>;

    /// List all blog tags.
    async fn tags(&self) -> AppResult<Vec<Tag>>;

    /// List all blog categories.
    async fn categories(&self) -> AppResult<Vec<Category>>;
}

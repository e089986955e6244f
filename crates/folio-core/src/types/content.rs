//! Entities served by the content API.
//!
//! Field names follow the API's camelCase JSON; snake_case aliases are
//! accepted because older endpoints still emit them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A curated collection page. Unpublished collections are only reachable
/// through signed preview links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Collection identifier.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Rendered HTML body.
    #[serde(default, alias = "content", alias = "html_content")]
    pub html: Option<String>,
    /// Whether the collection is publicly visible.
    #[serde(default)]
    pub published: bool,
    /// Last modification time.
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Collection {
    /// HTML body if present and not blank.
    pub fn into_html(self) -> Option<String> {
        self.html.filter(|h| !h.trim().is_empty())
    }
}

/// A blog post summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post identifier.
    pub id: String,
    /// URL slug.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Short summary.
    #[serde(default, alias = "summary")]
    pub excerpt: Option<String>,
    /// Tag names.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Category name.
    #[serde(default)]
    pub category: Option<String>,
    /// Publication time.
    #[serde(default, alias = "published_at")]
    pub published_at: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier.
    pub id: String,
    /// URL slug.
    pub slug: String,
    /// Project title.
    pub title: String,
    /// Project description.
    #[serde(default)]
    pub description: Option<String>,
    /// Technologies used.
    #[serde(default, alias = "tech_stack", alias = "technologies")]
    pub tech_stack: Vec<String>,
    /// Whether the project is featured on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Last modification time.
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A blog tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// URL slug.
    pub slug: String,
    /// Display name.
    pub name: String,
}

/// A blog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// URL slug.
    pub slug: String,
    /// Display name.
    pub name: String,
}

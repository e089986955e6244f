//! Public site configuration.

use serde::{Deserialize, Serialize};

/// Settings describing the public-facing website.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute origin of the public site, used for sitemap entries and
    /// preview links. No trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl SiteConfig {
    /// Joins a site-relative path onto the base URL.
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

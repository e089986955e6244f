//! Remote content API configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection settings for the remote content API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Base URL of the content API, e.g. `https://cms.example.dev/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Optional bearer token sent with every request.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

impl fmt::Debug for ContentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ContentConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

fn default_timeout() -> u64 {
    10
}

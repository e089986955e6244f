//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files plus `FOLIO__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod content;
pub mod logging;
pub mod preview;
pub mod site;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::content::ContentConfig;
pub use self::logging::LoggingConfig;
pub use self::preview::PreviewConfig;
pub use self::site::SiteConfig;

use crate::error::AppError;

/// Environment variable that overrides `preview.secret`.
pub const PREVIEW_SECRET_ENV: &str = "PREVIEW_TOKEN_SECRET";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Preview token settings.
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Remote content API settings.
    #[serde(default)]
    pub content: ContentConfig,
    /// Public site settings.
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml` and environment
    /// variables prefixed with `FOLIO__`. Both files are optional.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));
        Self::finish(builder)
    }

    /// Load configuration from an explicit file path (which must exist),
    /// still honouring environment overrides.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder().add_source(config::File::with_name(path));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("preview.secret", std::env::var(PREVIEW_SECRET_ENV).ok())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Validate settings that must be correct before the server starts.
    ///
    /// A missing preview secret is fatal: there is no built-in default.
    pub fn validate(&self) -> Result<(), AppError> {
        self.preview.validate()?;
        require_http_url("content.base_url", &self.content.base_url)?;
        require_http_url("site.base_url", &self.site.base_url)?;
        if self.content.timeout_seconds == 0 {
            return Err(AppError::configuration(
                "content.timeout_seconds must be greater than zero",
            ));
        }
        // Upstream fetches must give up before the server-wide request
        // timeout so the preview gate still answers with its own headers.
        if self.content.timeout_seconds >= self.server.request_timeout_seconds {
            return Err(AppError::configuration(format!(
                "content.timeout_seconds ({}) must be less than server.request_timeout_seconds ({})",
                self.content.timeout_seconds, self.server.request_timeout_seconds
            )));
        }
        Ok(())
    }
}

fn require_http_url(field: &str, value: &str) -> Result<(), AppError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(AppError::configuration(format!(
            "{field} must be an http(s) URL, got '{value}'"
        ))),
    }
}

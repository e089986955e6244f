//! HTTP client for the remote content API.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use folio_auth::SubjectId;
use folio_core::config::ContentConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::traits::ContentSource;
use folio_core::types::{BlogPost, Category, Collection, Project, Tag};

/// List endpoints answer either a bare array or `{ "data": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// Item endpoints answer either the object or `{ "data": {...} }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    fn into_item(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// reqwest-backed [`ContentSource`].
#[derive(Clone)]
pub struct ContentApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl fmt::Debug for ContentApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ContentApiClient {
    /// Builds a client with the configured base URL, key, and timeout.
    pub fn new(config: &ContentConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build content API client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    /// Absolute URL of an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get(&self, path: &str) -> AppResult<reqwest::Response> {
        let url = self.endpoint(path);
        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!(url = %url, "Content API request");
        request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Content API request to '{path}' failed"),
                e,
            )
        })
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> AppResult<Vec<T>> {
        let response = self.get(path).await?;
        let response = ensure_success(path, response)?;
        let envelope: ListEnvelope<T> = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Content API returned an unreadable body for '{path}'"),
                e,
            )
        })?;
        Ok(envelope.into_items())
    }
}

fn ensure_success(path: &str, response: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(status_error(path, status))
    }
}

/// Error for a non-2xx answer. 503 and 429 mean the API is up but shedding
/// load.
fn status_error(path: &str, status: StatusCode) -> AppError {
    let message = format!("Content API answered {status} for '{path}'");
    match status {
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::TOO_MANY_REQUESTS => {
            AppError::service_unavailable(message)
        }
        _ => AppError::external_service(message),
    }
}

#[async_trait]
impl ContentSource for ContentApiClient {
    async fn collection_html(&self, id: &str) -> AppResult<Option<String>> {
        // Ids outside the subject alphabet cannot be placed in the path.
        if SubjectId::parse(id).is_err() {
            return Ok(None);
        }

        let path = format!("collections/{id}");
        let response = self.get(&path).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(&path, response)?;

        let envelope: ItemEnvelope<Collection> = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Content API returned an unreadable collection '{id}'"),
                e,
            )
        })?;
        Ok(envelope.into_item().into_html())
    }

    async fn blog_posts(&self) -> AppResult<Vec<BlogPost>> {
        self.get_list("blogs").await
    }

    async fn projects(&self) -> AppResult<Vec<Project>> {
        self.get_list("projects").await
    }

    async fn tags(&self) -> AppResult<Vec<Tag>> {
        self.get_list("tags").await
    }

    async fn categories(&self) -> AppResult<Vec<Category>> {
        self.get_list("categories").await
    }
}

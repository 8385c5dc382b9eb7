//! HTTP client for fetching documentation pages
//!
//! Pages are fetched with a plain GET, one URL at a time. Any 2xx body is decoded as
//! UTF-8 whatever charset the server declares (the PySide2 site has been seen
//! mis-declaring it). Failures only drop the page in question.

use crate::error::{DocError, DocResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Configuration for HTTP client behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Request timeout in seconds; `None` keeps the client default
    pub timeout_seconds: Option<u64>,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("widget-explorer/{}", env!("CARGO_PKG_VERSION")),
            timeout_seconds: None,
            follow_redirects: true,
        }
    }
}

/// Anything that can hand back the text of a documentation page
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> DocResult<String>;
}

/// reqwest-backed document source
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .user_agent(&config.user_agent)
            .gzip(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            });
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder.build().context("Failed to create HTTP client")?;
        Ok(Self { client, config })
    }

    /// Get the configuration
    pub const fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[async_trait]
impl DocumentSource for HttpClient {
    async fn fetch_text(&self, url: &str) -> DocResult<String> {
        let parsed = Url::parse(url).map_err(|e| DocError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!("Fetching documentation page: {}", url);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| DocError::request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocError::http_status(url, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DocError::request(url, e))?;
        let text = decode_utf8(&body);
        debug!("Fetched {} ({} chars)", url, text.len());
        Ok(text)
    }
}

/// Always UTF-8, invalid sequences replaced
pub fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Pages served from memory, keyed by URL. Unknown URLs answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticDocumentSource {
    pages: HashMap<String, String>,
}

impl StaticDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.insert(url.into(), text.into());
        self
    }
}

#[async_trait]
impl DocumentSource for StaticDocumentSource {
    async fn fetch_text(&self, url: &str) -> DocResult<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| DocError::http_status(url, 404))
    }
}

/// A page that was fetched successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub url: String,
    pub text: String,
}

/// Fetch `urls` sequentially, keeping the successes in input order.
pub async fn fetch_documents<S>(source: &S, urls: &[String]) -> Vec<FetchedDocument>
where
    S: DocumentSource + ?Sized,
{
    let mut documents = Vec::with_capacity(urls.len());
    for url in urls {
        match source.fetch_text(url).await {
            Ok(text) => documents.push(FetchedDocument {
                url: url.clone(),
                text,
            }),
            Err(e) => warn!("Skipping documentation page {}: {}", url, e),
        }
    }
    info!(
        "🌐 Fetched {}/{} documentation pages",
        documents.len(),
        urls.len()
    );
    documents
}

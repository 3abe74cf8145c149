//! Page fetcher implementation
//!
//! Performs exactly one request per call and converts every failure into
//! one of the three fetch error kinds:
//! - transport failure (no response) -> `Error::Network`
//! - non-success status -> `Error::HttpStatus` with the status reason
//! - body that does not match the expected shape -> `Error::Decode`

use crate::entity::CharacterPage;
use crate::error::{Error, Result};
use crate::pager::FIRST_PAGE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// The collection endpoint the original viewer browses
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/character";

/// Configuration for the page fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Collection endpoint URL
    pub base_url: String,
    /// Query parameter carrying the page number
    pub page_param: String,
    /// Request timeout; elapsing maps to a network failure
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_param: "page".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("pagekeeper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetcherConfig {
    /// Create a new config builder
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::default()
    }
}

/// Builder for fetcher config
#[derive(Default)]
pub struct FetcherConfigBuilder {
    config: FetcherConfig,
}

impl FetcherConfigBuilder {
    /// Set the collection endpoint URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the page query parameter name
    pub fn page_param(mut self, param: impl Into<String>) -> Self {
        self.config.page_param = param.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> FetcherConfig {
        self.config
    }
}

/// Fetches one page of characters per call
pub struct PageFetcher {
    client: Client,
    base: Url,
    config: FetcherConfig,
}

impl PageFetcher {
    /// Create a fetcher against the default endpoint
    pub fn new() -> Result<Self> {
        Self::with_config(FetcherConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: FetcherConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base,
            config,
        })
    }

    /// The configuration this fetcher was built with
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch one page of characters
    ///
    /// Page numbers start at 1. Returns the page as-is, even when its
    /// `results` array is empty; a body missing `results` is a decode
    /// failure, never an implicit empty list.
    pub async fn fetch_page(&self, page: u32) -> Result<CharacterPage> {
        if page < FIRST_PAGE {
            return Err(Error::config(format!(
                "page numbers start at {FIRST_PAGE}, got {page}"
            )));
        }

        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair(&self.config.page_param, &page.to_string());

        debug!(%url, page, "fetching page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
            ));
        }

        let body = response.text().await?;
        let fetched: CharacterPage =
            serde_json::from_str(&body).map_err(|e| Error::decode(e.to_string()))?;

        debug!(page, records = fetched.len(), "page fetched");
        Ok(fetched)
    }
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

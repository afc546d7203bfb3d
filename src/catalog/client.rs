//! iTunes Search API HTTP client
//!
//! Handles communication with the catalog search endpoint.
//! See: https://performance-partners.apple.com/search-api
//!
//! The endpoint needs no API key. Failures are classified into transport,
//! HTTP status and decode errors; nothing is retried here.

use std::time::Duration;

use tracing::debug;

use super::dto;
use crate::catalog::domain::SearchError;
use crate::catalog::request::SearchRequest;
use crate::config::CatalogConfig;

/// Default search endpoint
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com/search";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Catalog search client
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the public endpoint
    pub fn new() -> Result<Self, SearchError> {
        Self::from_config(&CatalogConfig::default())
    }

    /// Create a client from configuration
    ///
    /// The client accepts gzip-compressed responses and applies the
    /// configured timeout, if any.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder().gzip(true).user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| SearchError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send the HTTP request and parse the response envelope
    pub async fn search(&self, request: &SearchRequest) -> Result<dto::ResultArray, SearchError> {
        let url = request.url(&self.base_url);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        decode(&body)
    }
}

/// Decode a response body into the envelope
pub fn decode(body: &str) -> Result<dto::ResultArray, SearchError> {
    serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))
}

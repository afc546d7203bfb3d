//! Trait definition for the catalog search API.
//!
//! The search controller only talks to `CatalogApi`, so tests can
//! substitute mock implementations for the real HTTP client.
//!
//! # Example
//!
//! ```ignore
//! use store_search::catalog::traits::CatalogApi;
//!
//! async fn count<T: CatalogApi>(client: &T, request: &SearchRequest) -> usize {
//!     client.search(request).await.map(|r| r.results.len()).unwrap_or(0)
//! }
//! ```

use async_trait::async_trait;

use super::dto;
use super::domain::SearchError;
use super::request::SearchRequest;

/// Trait for catalog search lookups.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Run one search and return the raw response envelope.
    async fn search(&self, request: &SearchRequest) -> Result<dto::ResultArray, SearchError>;
}

#[async_trait]
impl CatalogApi for super::client::CatalogClient {
    async fn search(&self, request: &SearchRequest) -> Result<dto::ResultArray, SearchError> {
        self.search(request).await
    }
}

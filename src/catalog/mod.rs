//! Catalog module - searches the iTunes Store catalog and normalizes results.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - Our result, category and error types
//! - **API DTOs** (`dto.rs`) - Exact API response shapes, every field optional
//! - **Adapter** (`adapter.rs`) - Total conversion from DTOs to domain models
//! - **Collation** (`collation.rs`) - Natural ordering of display names
//! - **Request / Client** - URL construction and the HTTP client
//! - **Traits** - `CatalogApi` seam so the search controller can be mocked
//!
//! # Usage
//!
//! ```ignore
//! use catalog::{CatalogClient, Category, SearchRequest};
//!
//! let client = CatalogClient::new()?;
//! let response = client
//!     .search(&SearchRequest::new("beatles", Category::Music))
//!     .await?;
//! for r in catalog::to_results(response) {
//!     println!("{} - {}", r.display_name, r.artist);
//! }
//! ```

pub mod adapter;
pub mod client;
pub mod collation;
pub mod display;
pub mod domain;
pub mod dto;
pub mod request;
pub mod traits;

pub use adapter::{normalize, to_results};
pub use client::CatalogClient;
pub use collation::{compare_display_names, sort_results};
pub use domain::{Category, NormalizedResult, SearchError, SearchErrorKind};
pub use request::SearchRequest;
pub use traits::CatalogApi;

//! iTunes Search API Data Transfer Objects
//!
//! These types match what the Search API returns for `/search`.
//! Every field is optional: the payload shape varies by media kind
//! (tracks, collections, software, books) and any field may be missing.
//! DO NOT use these types outside the catalog module - convert to domain types.
//!
//! API Reference: https://performance-partners.apple.com/search-api

use serde::{Deserialize, Serialize};

/// Search response envelope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultArray {
    /// Number of results reported by the server
    #[serde(default)]
    pub result_count: u32,
    /// Raw catalog items
    #[serde(default)]
    pub results: Vec<RawCatalogItem>,
}

/// One catalog item, exactly as returned by the API
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalogItem {
    pub track_name: Option<String>,
    pub collection_name: Option<String>,
    pub artist_name: Option<String>,
    /// Media kind ("song", "album", "ebook", ...)
    pub kind: Option<String>,
    pub track_price: Option<f64>,
    pub collection_price: Option<f64>,
    /// Generic item price (software, books)
    #[serde(rename = "price")]
    pub item_price: Option<f64>,
    /// ISO 4217 currency code
    pub currency: Option<String>,
    /// 60x60 artwork
    #[serde(rename = "artworkUrl60")]
    pub artwork_url_small: Option<String>,
    /// 100x100 artwork
    #[serde(rename = "artworkUrl100")]
    pub artwork_url_large: Option<String>,
    pub track_view_url: Option<String>,
    pub collection_view_url: Option<String>,
    pub primary_genre_name: Option<String>,
    /// Book genres (books don't carry `primaryGenreName`)
    pub genres: Option<Vec<String>>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs accept what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

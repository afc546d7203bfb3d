//! Test fixtures shared across modules.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{raw_item, response_of};
//!
//! let response = response_of(vec![raw_item("Yesterday", "song")]);
//! ```

use crate::catalog::dto::{RawCatalogItem, ResultArray};

/// Creates a raw item with a track name, kind and sensible defaults.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let item = RawCatalogItem {
///     track_price: Some(0.99),
///     ..raw_item("Yesterday", "song")
/// };
/// ```
pub fn raw_item(name: &str, kind: &str) -> RawCatalogItem {
    RawCatalogItem {
        track_name: Some(name.to_string()),
        artist_name: Some("Test Artist".to_string()),
        kind: Some(kind.to_string()),
        currency: Some("USD".to_string()),
        track_view_url: Some(format!("https://example.com/{}", name.to_lowercase())),
        ..Default::default()
    }
}

/// Wraps items in a response envelope with a matching count.
pub fn response_of(items: Vec<RawCatalogItem>) -> ResultArray {
    ResultArray {
        result_count: items.len() as u32,
        results: items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_item_defaults() {
        let item = raw_item("Yesterday", "song");
        assert_eq!(item.track_name.as_deref(), Some("Yesterday"));
        assert_eq!(item.kind.as_deref(), Some("song"));
        assert!(item.track_price.is_none());
    }

    #[test]
    fn test_response_count_matches() {
        let response = response_of(vec![raw_item("A", "song"), raw_item("B", "album")]);
        assert_eq!(response.result_count, 2);
    }
}

//! Internal domain models for catalog search.
//!
//! These types are OUR types - they don't change when the Search API changes.
//! All API responses get converted into these types via the adapter.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A catalog item resolved for display.
///
/// Every field is fully resolved; nothing optional leaks past normalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NormalizedResult {
    /// Track name, falling back to collection name
    pub display_name: String,
    pub artist: String,
    /// Store page, track URL first then collection URL
    pub store_url: String,
    /// Track price, then collection price, then item price, else 0
    pub price: f64,
    pub genre: String,
    /// Human-readable media type ("Song", "E-Book", ...)
    pub type_label: String,
    /// Raw media kind as sent by the API, or empty
    pub kind: String,
    pub currency: String,
    pub small_image_url: String,
    pub large_image_url: String,
}

/// Media category used to scope a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Music,
    Software,
    Ebook,
}

impl Category {
    /// All categories in segment order
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Music,
        Category::Software,
        Category::Ebook,
    ];

    /// The API `entity` keyword, or `None` for an unfiltered search
    pub fn entity(self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Music => Some("musicTrack"),
            Category::Software => Some("software"),
            Category::Ebook => Some("ebook"),
        }
    }

    /// Lenient parse: unrecognized text falls back to `All`
    pub fn parse_lenient(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::All => "all",
            Category::Music => "music",
            Category::Software => "software",
            Category::Ebook => "ebook",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(Category::All),
            "music" | "musictrack" => Ok(Category::Music),
            "software" | "apps" | "app" => Ok(Category::Software),
            "ebook" | "ebooks" | "e-book" | "books" => Ok(Category::Ebook),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Returned by strict category parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Classification of a failed search, preserved for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorKind {
    NetworkTransport,
    HttpStatus,
    Decode,
}

/// Errors that can occur while performing a catalog search
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl SearchError {
    pub fn kind(&self) -> SearchErrorKind {
        match self {
            SearchError::Transport(_) => SearchErrorKind::NetworkTransport,
            SearchError::HttpStatus(_) => SearchErrorKind::HttpStatus,
            SearchError::Decode(_) => SearchErrorKind::Decode,
        }
    }

    /// The single message shown for any failure kind
    pub fn user_message(&self) -> &'static str {
        "There was an error accessing the iTunes Store. Please try again."
    }
}

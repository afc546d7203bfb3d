//! Adapter layer: Convert Search API DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! Normalization is total: a partial payload degrades to defaults, never errors.

use super::collation;
use super::dto;
use crate::catalog::domain::NormalizedResult;

/// Kind assumed when the API omits it
const DEFAULT_KIND: &str = "audiobook";

/// Normalize one raw catalog item
pub fn normalize(raw: dto::RawCatalogItem) -> NormalizedResult {
    let type_label = type_label(raw.kind.as_deref()).to_string();
    let genre = resolve_genre(raw.primary_genre_name, raw.genres);

    NormalizedResult {
        display_name: first_non_empty(raw.track_name, raw.collection_name),
        artist: raw.artist_name.unwrap_or_default(),
        store_url: first_non_empty(raw.track_view_url, raw.collection_view_url),
        price: raw
            .track_price
            .or(raw.collection_price)
            .or(raw.item_price)
            .unwrap_or(0.0),
        genre,
        type_label,
        kind: raw.kind.unwrap_or_default(),
        currency: raw.currency.unwrap_or_default(),
        small_image_url: raw.artwork_url_small.unwrap_or_default(),
        large_image_url: raw.artwork_url_large.unwrap_or_default(),
    }
}

/// Normalize a whole response and sort it by display name
pub fn to_results(response: dto::ResultArray) -> Vec<NormalizedResult> {
    let mut results: Vec<_> = response.results.into_iter().map(normalize).collect();
    collation::sort_results(&mut results);
    results
}

/// Map an API kind to its display label
pub fn type_label(kind: Option<&str>) -> &'static str {
    match kind.unwrap_or(DEFAULT_KIND) {
        "album" => "Album",
        "audiobook" => "Audio Book",
        "book" => "Book",
        "ebook" => "E-Book",
        "feature-movie" => "Movie",
        "music-video" => "Music Video",
        "podcast" => "Podcast",
        "software" => "App",
        "song" => "Song",
        "tv-episode" => "TV Episode",
        _ => "Unknown",
    }
}

/// Track-level text wins unless it is missing or blank
fn first_non_empty(track: Option<String>, collection: Option<String>) -> String {
    track
        .filter(|s| !s.is_empty())
        .or(collection.filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

/// Primary genre wins; books only carry a genre list
fn resolve_genre(primary: Option<String>, genres: Option<Vec<String>>) -> String {
    match (primary, genres) {
        (Some(primary), _) => primary,
        (None, Some(genres)) => genres.join(", "),
        (None, None) => String::new(),
    }
}

//! Search request construction.

use crate::catalog::domain::Category;

/// Number of results requested unless configured otherwise
pub const DEFAULT_LIMIT: u32 = 200;

/// One search against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub category: Category,
    pub limit: u32,
    /// Two-letter storefront code; the API defaults to US when omitted
    pub country: Option<String>,
}

impl SearchRequest {
    pub fn new(term: impl Into<String>, category: Category) -> Self {
        Self {
            term: term.into(),
            category,
            limit: DEFAULT_LIMIT,
            country: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country.filter(|c| !c.trim().is_empty());
        self
    }

    /// Query string without the leading `?`
    ///
    /// The term is trimmed and percent-encoded; `entity` is omitted for `All`.
    pub fn query_string(&self) -> String {
        let mut params = Vec::with_capacity(4);
        if let Some(entity) = self.category.entity() {
            params.push(format!("entity={}", entity));
        }
        params.push(format!("term={}", urlencoding::encode(self.term.trim())));
        params.push(format!("limit={}", self.limit));
        if let Some(ref country) = self.country {
            params.push(format!("country={}", urlencoding::encode(country.trim())));
        }
        params.join("&")
    }

    /// Full request URL against `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}?{}", base_url, self.query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_query() {
        let request = SearchRequest::new("abc", Category::Music);
        assert_eq!(request.query_string(), "entity=musicTrack&term=abc&limit=200");
    }

    #[test]
    fn test_all_has_no_entity() {
        let request = SearchRequest::new("abc", Category::All);
        assert_eq!(request.query_string(), "term=abc&limit=200");
    }

    #[test]
    fn test_term_is_escaped_and_trimmed() {
        let request = SearchRequest::new("  Guns N' Roses & co ", Category::All);
        assert_eq!(
            request.query_string(),
            "term=Guns%20N%27%20Roses%20%26%20co&limit=200"
        );
    }

    #[test]
    fn test_url_with_limit_and_country() {
        let request = SearchRequest::new("beatles", Category::Ebook)
            .with_limit(25)
            .with_country(Some("gb".to_string()));
        assert_eq!(
            request.url("https://itunes.apple.com/search"),
            "https://itunes.apple.com/search?entity=ebook&term=beatles&limit=25&country=gb"
        );
    }

    #[test]
    fn test_blank_country_ignored() {
        let request = SearchRequest::new("x", Category::All).with_country(Some("  ".to_string()));
        assert_eq!(request.country, None);
    }
}

//! Search session state.

use crate::catalog::{Category, NormalizedResult, SearchError};

/// Where a search session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// No search started yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Finished; an empty list means nothing was found
    Succeeded(Vec<NormalizedResult>),
    /// Request failed
    Failed(SearchError),
    /// Request was cancelled before it finished
    Cancelled,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Succeeded, Failed or Cancelled
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchState::Idle | SearchState::Loading)
    }

    /// Results when the search succeeded, otherwise empty
    pub fn results(&self) -> &[NormalizedResult] {
        match self {
            SearchState::Succeeded(results) => results,
            _ => &[],
        }
    }

    /// Succeeded with zero results ("Nothing Found")
    pub fn is_empty_result(&self) -> bool {
        matches!(self, SearchState::Succeeded(results) if results.is_empty())
    }
}

/// One logical search attempt
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchQuerySession {
    pub query_text: String,
    pub category: Category,
    /// Identifies the authoritative attempt; increases with every new search
    pub generation: u64,
    pub state: SearchState,
}

impl SearchQuerySession {
    pub(crate) fn loading(query_text: &str, category: Category, generation: u64) -> Self {
        Self {
            query_text: query_text.to_string(),
            category,
            generation,
            state: SearchState::Loading,
        }
    }
}

//! Search query controller.
//!
//! Owns the single active search session. Each search runs as a tokio task;
//! its outcome comes back over a channel and is applied on the controller's
//! `&mut self`, so all state changes happen in one place. A completion is
//! applied only when its generation is still the current one. Cancelling a
//! superseded request is best effort; the generation check is what keeps a
//! late response from overwriting newer state.
//!
//! `start_search` spawns onto the ambient tokio runtime and must be called
//! from within one.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use super::session::{SearchQuerySession, SearchState};
use crate::catalog::request::DEFAULT_LIMIT;
use crate::catalog::{self, CatalogApi, CatalogClient, Category, SearchError, SearchRequest};
use crate::config::Config;

/// How a request task finished
#[derive(Debug)]
pub enum Outcome {
    Finished(Result<catalog::dto::ResultArray, SearchError>),
    Cancelled,
}

/// Message sent by a request task back to its controller
#[derive(Debug)]
pub struct Completion {
    pub generation: u64,
    pub outcome: Outcome,
}

/// Sends a request task's completion, or a failure if the task ends early.
///
/// A task that panics drops its guard without calling `finish`, and the
/// controller still sees the generation settle.
struct CompletionGuard {
    generation: u64,
    completions: Option<mpsc::UnboundedSender<Completion>>,
}

impl CompletionGuard {
    fn new(generation: u64, completions: mpsc::UnboundedSender<Completion>) -> Self {
        Self {
            generation,
            completions: Some(completions),
        }
    }

    fn finish(mut self, outcome: Outcome) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: Outcome) {
        if let Some(completions) = self.completions.take() {
            // Receiver is gone only when the controller was dropped
            let _ = completions.send(Completion {
                generation: self.generation,
                outcome,
            });
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if self.completions.is_some() {
            warn!("Search task {} ended without a result", self.generation);
            self.send(Outcome::Finished(Err(SearchError::Transport(
                "search task ended without a result".to_string(),
            ))));
        }
    }
}

struct InFlight {
    generation: u64,
    cancel: oneshot::Sender<()>,
}

/// Drives one search at a time against a catalog API
pub struct SearchController {
    api: Arc<dyn CatalogApi>,
    limit: u32,
    country: Option<String>,
    generation: u64,
    session: SearchQuerySession,
    in_flight: Option<InFlight>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    state_tx: watch::Sender<SearchState>,
}

impl SearchController {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(SearchState::Idle);

        Self {
            api,
            limit: DEFAULT_LIMIT,
            country: None,
            generation: 0,
            session: SearchQuerySession::default(),
            in_flight: None,
            completions_tx,
            completions_rx,
            state_tx,
        }
    }

    /// Build a controller backed by the HTTP client described in `config`
    pub fn from_config(config: &Config) -> Result<Self, SearchError> {
        let client = CatalogClient::from_config(&config.catalog)?;
        Ok(Self::new(Arc::new(client))
            .with_limit(config.catalog.limit)
            .with_country(config.catalog.country.clone()))
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    /// The current session
    pub fn session(&self) -> &SearchQuerySession {
        &self.session
    }

    pub fn state(&self) -> &SearchState {
        &self.session.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Observe state transitions
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }

    /// Start a new search, superseding any search in flight.
    ///
    /// Blank query text is ignored and the previous session is returned
    /// unchanged. Otherwise the new session is returned already `Loading`.
    pub fn start_search(&mut self, query_text: &str, category: Category) -> &SearchQuerySession {
        let query = query_text.trim();
        if query.is_empty() {
            debug!("Ignoring blank search query");
            return &self.session;
        }

        self.cancel_in_flight();

        self.generation += 1;
        let generation = self.generation;
        self.session = SearchQuerySession::loading(query, category, generation);
        self.publish();

        let request = SearchRequest::new(query, category)
            .with_limit(self.limit)
            .with_country(self.country.clone());
        info!(
            "Searching {:?} in {} (generation {})",
            request.term, category, generation
        );

        let (cancel, cancelled) = oneshot::channel();
        let api = Arc::clone(&self.api);
        let guard = CompletionGuard::new(generation, self.completions_tx.clone());

        tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = cancelled => Outcome::Cancelled,
                result = api.search(&request) => Outcome::Finished(result),
            };
            guard.finish(outcome);
        });

        self.in_flight = Some(InFlight { generation, cancel });
        &self.session
    }

    /// Ask the current request to stop; it settles as `Cancelled`
    pub fn cancel(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!("Cancelling search generation {}", in_flight.generation);
            let _ = in_flight.cancel.send(());
        }
    }

    /// Apply a request's completion.
    ///
    /// Returns `true` when the session changed; completions from superseded
    /// generations are dropped.
    pub fn handle_completion(&mut self, completion: Completion) -> bool {
        if completion.generation != self.generation || !self.session.state.is_loading() {
            debug!(
                "Discarding stale completion (generation {}, current {})",
                completion.generation, self.generation
            );
            return false;
        }

        if self
            .in_flight
            .as_ref()
            .is_some_and(|f| f.generation == completion.generation)
        {
            self.in_flight = None;
        }

        self.session.state = match completion.outcome {
            Outcome::Finished(Ok(response)) => {
                let results = catalog::to_results(response);
                info!(
                    "Search {:?} finished with {} results",
                    self.session.query_text,
                    results.len()
                );
                SearchState::Succeeded(results)
            }
            Outcome::Finished(Err(e)) => {
                warn!("Search {:?} failed ({:?}): {}", self.session.query_text, e.kind(), e);
                SearchState::Failed(e)
            }
            Outcome::Cancelled => {
                info!("Search {:?} cancelled", self.session.query_text);
                SearchState::Cancelled
            }
        };
        self.publish();
        true
    }

    /// Wait for the next completion and apply it
    pub async fn next_update(&mut self) -> bool {
        match self.completions_rx.recv().await {
            Some(completion) => self.handle_completion(completion),
            None => false,
        }
    }

    /// Apply every completion that has already arrived, without waiting
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            if self.handle_completion(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until the current session leaves `Loading`
    pub async fn wait_until_settled(&mut self) -> &SearchState {
        while self.session.state.is_loading() {
            self.next_update().await;
        }
        &self.session.state
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!("Superseding search generation {}", in_flight.generation);
            let _ = in_flight.cancel.send(());
        }
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.session.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::catalog::dto;
    use crate::catalog::SearchErrorKind;
    use crate::catalog::traits::mocks::{GatedCatalog, MockCatalog, PanickingCatalog};
    use crate::test_utils::{raw_item, response_of};

    fn controller_with(mock: MockCatalog) -> (SearchController, Arc<MockCatalog>) {
        let mock = Arc::new(mock);
        let api: Arc<dyn CatalogApi> = mock.clone();
        (SearchController::new(api), mock)
    }

    #[tokio::test]
    async fn test_end_to_end_music_search() {
        let body = r#"{"resultCount":1,"results":[{"trackName":"X","artistName":"Y","kind":"song","trackPrice":1.5,"currency":"USD"}]}"#;
        let response: dto::ResultArray = serde_json::from_str(body).unwrap();
        let (mut controller, mock) = controller_with(MockCatalog::with_items(response.results));

        let session = controller.start_search("abc", Category::Music);
        assert_eq!(session.generation, 1);
        assert!(session.state.is_loading());

        let state = controller.wait_until_settled().await.clone();

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(
            recorded[0].query_string(),
            "entity=musicTrack&term=abc&limit=200"
        );

        let results = match state {
            SearchState::Succeeded(results) => results,
            other => panic!("expected success, got {:?}", other),
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "X");
        assert_eq!(results[0].artist, "Y");
        assert_eq!(results[0].type_label, "Song");
        assert_eq!(results[0].price, 1.5);
        assert_eq!(results[0].currency, "USD");
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let (mut controller, mock) = controller_with(MockCatalog::with_items(vec![]));
        let before = controller.session().clone();

        let session = controller.start_search("   ", Category::All).clone();

        assert_eq!(session, before);
        assert_eq!(controller.generation(), 0);
        assert_eq!(controller.state(), &SearchState::Idle);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(mock.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_keeps_previous_session() {
        let (mut controller, _mock) =
            controller_with(MockCatalog::with_items(vec![raw_item("A", "song")]));
        controller.start_search("first", Category::Music);
        controller.wait_until_settled().await;
        let before = controller.session().clone();

        let session = controller.start_search("\t \n", Category::Software).clone();

        assert_eq!(session, before);
        assert_eq!(session.query_text, "first");
        assert_eq!(controller.generation(), 1);
    }

    #[tokio::test]
    async fn test_empty_results_are_success() {
        let (mut controller, _mock) = controller_with(MockCatalog::with_items(vec![]));

        controller.start_search("zzzz", Category::All);
        let state = controller.wait_until_settled().await;

        assert_eq!(state, &SearchState::Succeeded(vec![]));
        assert!(state.is_empty_result());
    }

    #[tokio::test]
    async fn test_failure_keeps_error_kind() {
        let (mut controller, _mock) =
            controller_with(MockCatalog::with_error(SearchError::HttpStatus(503)));

        controller.start_search("abc", Category::All);
        let state = controller.wait_until_settled().await;

        assert_eq!(state, &SearchState::Failed(SearchError::HttpStatus(503)));
    }

    #[tokio::test]
    async fn test_results_are_sorted() {
        let (mut controller, _mock) = controller_with(MockCatalog::with_items(vec![
            raw_item("Élan", "song"),
            raw_item("apple", "song"),
            raw_item("Banana", "song"),
        ]));

        controller.start_search("fruit", Category::Music);
        let names: Vec<_> = controller
            .wait_until_settled()
            .await
            .results()
            .iter()
            .map(|r| r.display_name.clone())
            .collect();

        assert_eq!(names, vec!["apple", "Banana", "Élan"]);
    }

    #[tokio::test]
    async fn test_superseded_search_never_overwrites() {
        let (mock, mut calls) = GatedCatalog::new();
        let mut controller = SearchController::new(Arc::new(mock));

        controller.start_search("a", Category::All);
        let call_a = calls.recv().await.unwrap();
        assert_eq!(call_a.request.term, "a");

        controller.start_search("b", Category::All);
        assert_eq!(controller.generation(), 2);
        let call_b = calls.recv().await.unwrap();
        assert_eq!(call_b.request.term, "b");

        call_b.respond(Ok(response_of(vec![raw_item("B", "song")])));
        call_a.respond(Ok(response_of(vec![raw_item("A", "song")])));

        let state = controller.wait_until_settled().await.clone();
        assert_eq!(state.results()[0].display_name, "B");

        tokio::time::sleep(Duration::from_millis(10)).await;
        controller.poll_completions();
        assert_eq!(controller.state(), &state);
        assert_eq!(controller.session().query_text, "b");
    }

    #[tokio::test]
    async fn test_late_completion_is_discarded() {
        let (mock, mut calls) = GatedCatalog::new();
        let mut controller = SearchController::new(Arc::new(mock));

        controller.start_search("a", Category::All);
        controller.start_search("b", Category::All);
        let call = calls.recv().await.unwrap();
        call.respond(Ok(response_of(vec![raw_item("B", "song")])));
        controller.wait_until_settled().await;
        let settled = controller.session().clone();

        let applied = controller.handle_completion(Completion {
            generation: 1,
            outcome: Outcome::Finished(Ok(response_of(vec![raw_item("A", "song")]))),
        });

        assert!(!applied);
        assert_eq!(controller.session(), &settled);
    }

    #[tokio::test]
    async fn test_stale_error_and_cancel_are_discarded() {
        let (mock, _calls) = GatedCatalog::new();
        let mut controller = SearchController::new(Arc::new(mock));
        controller.start_search("a", Category::All);
        controller.start_search("b", Category::All);

        assert!(!controller.handle_completion(Completion {
            generation: 1,
            outcome: Outcome::Finished(Err(SearchError::Transport("reset".into()))),
        }));
        assert!(!controller.handle_completion(Completion {
            generation: 1,
            outcome: Outcome::Cancelled,
        }));
        assert!(controller.state().is_loading());
    }

    #[tokio::test]
    async fn test_cancel_settles_as_cancelled() {
        let (mock, mut calls) = GatedCatalog::new();
        let mut controller = SearchController::new(Arc::new(mock));

        controller.start_search("slow", Category::Ebook);
        let _call = calls.recv().await.unwrap();
        controller.cancel();

        let state = controller.wait_until_settled().await;
        assert_eq!(state, &SearchState::Cancelled);
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let (mut controller, _mock) =
            controller_with(MockCatalog::with_items(vec![raw_item("X", "song")]));
        let mut states = controller.subscribe();

        controller.start_search("x", Category::All);
        assert!(states.borrow_and_update().is_loading());

        controller.wait_until_settled().await;
        assert!(states.has_changed().unwrap());
        assert_eq!(states.borrow_and_update().results().len(), 1);
    }

    #[tokio::test]
    async fn test_limit_and_country_applied() {
        let (controller, mock) = controller_with(MockCatalog::with_items(vec![]));
        let mut controller = controller
            .with_limit(50)
            .with_country(Some("gb".to_string()));

        controller.start_search("abc", Category::Software);
        controller.wait_until_settled().await;

        assert_eq!(
            mock.recorded()[0].query_string(),
            "entity=software&term=abc&limit=50&country=gb"
        );
    }

    #[tokio::test]
    async fn test_garbled_category_searches_everything() {
        let (mut controller, mock) = controller_with(MockCatalog::with_items(vec![]));

        controller.start_search("abc", Category::parse_lenient("???"));
        controller.wait_until_settled().await;

        assert_eq!(mock.recorded()[0].query_string(), "term=abc&limit=200");
    }

    #[tokio::test]
    async fn test_panicking_request_settles_as_failed() {
        let mut controller = SearchController::new(Arc::new(PanickingCatalog));
        controller.start_search("boom", Category::All);

        let state = tokio::time::timeout(Duration::from_secs(5), controller.wait_until_settled())
            .await
            .unwrap()
            .clone();

        match state {
            SearchState::Failed(e) => assert_eq!(e.kind(), SearchErrorKind::NetworkTransport),
            other => panic!("expected failure, got {:?}", other),
        }
    }
}

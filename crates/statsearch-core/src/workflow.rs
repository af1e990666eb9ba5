//! Search workflow controller.
//!
//! [`SearchState`] is the single owner of interaction state. Front ends never
//! mutate it directly: every user action and network outcome is turned into a
//! [`SearchEvent`] and passed to [`SearchState::apply`], which returns the
//! side effect (if any) the caller must perform.
//!
//! # State machine
//!
//! ```text
//!                 submit (match)                 fetch succeeded
//!   Idle/Error/Success ──────────────▶ Loading ─────────────────▶ Success
//!          │                              │
//!          │ submit (no match)            │ fetch failed
//!          ▼                              ▼
//!        Error                 Error (ShowError) / Loading (KeepLoading)
//!
//!   clear: any ──▶ Idle        query changed: any ──▶ same phase
//! ```
//!
//! The gate runs synchronously inside `submit`, so validation never rests in a
//! phase of its own.
//!
//! # Overlapping requests
//!
//! A new submission does not cancel the network operation of an earlier one.
//! Every fetch is stamped with a [`RequestId`] and tracked until it completes.
//! [`ResponseOrdering`] decides which completions are applied; `clear` and a
//! rejected query abandon everything still pending.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::types::{RequestId, ResultItem};
use crate::validation::{validate_query, ValidationError};

/// What happens to the UI when a fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchFailurePolicy {
    /// Log the failure and leave the phase untouched. A search that was
    /// loading stays loading until the next submit or clear.
    KeepLoading,
    /// Log the failure and move to [`SearchPhase::Error`].
    #[default]
    ShowError,
}

/// Which fetch completions are applied when requests overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseOrdering {
    /// Every pending request is applied as it resolves; the one that resolves
    /// last determines what is shown.
    LastResolvedWins,
    /// Issuing a request abandons all earlier ones; only the most recently
    /// issued request can change the state.
    #[default]
    LatestRequestOnly,
}

/// Behavioral switches for the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowPolicy {
    pub on_fetch_failure: FetchFailurePolicy,
    pub ordering: ResponseOrdering,
}

impl WorkflowPolicy {
    /// Policy reproducing the original single-page app exactly: failures
    /// leave the loading indicator up and overlapping responses race.
    pub fn legacy() -> Self {
        Self {
            on_fetch_failure: FetchFailurePolicy::KeepLoading,
            ordering: ResponseOrdering::LastResolvedWins,
        }
    }
}

/// The active display phase. Exactly one is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    /// User-visible message
    Error(String),
    /// Results of the last applied fetch, in endpoint order
    Success(Vec<ResultItem>),
}

/// Inputs to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The input field changed
    QueryChanged(String),
    /// The form was submitted with the current query
    Submit,
    /// The clear action was triggered
    Clear,
    FetchSucceeded {
        request: RequestId,
        items: Vec<ResultItem>,
    },
    FetchFailed {
        request: RequestId,
        message: String,
    },
}

/// Work the caller must perform after [`SearchState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEffect {
    /// Fetch the endpoint and report back with the same request id
    Fetch(RequestId),
}

/// Interaction state of one search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    phase: SearchPhase,
    policy: WorkflowPolicy,
    last_issued: RequestId,
    pending: Vec<RequestId>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(WorkflowPolicy::default())
    }
}

impl SearchState {
    /// Creates an idle state with an empty query.
    pub fn new(policy: WorkflowPolicy) -> Self {
        Self {
            query: String::new(),
            phase: SearchPhase::Idle,
            policy,
            last_issued: RequestId::from_u64(0),
            pending: Vec::new(),
        }
    }

    /// Applies one event and returns the effect to perform, if any.
    pub fn apply(&mut self, event: SearchEvent) -> Option<SearchEffect> {
        match event {
            SearchEvent::QueryChanged(text) => {
                self.query = text;
                None
            }
            SearchEvent::Submit => self.submit(),
            SearchEvent::Clear => {
                self.query.clear();
                self.phase = SearchPhase::Idle;
                self.abandon_pending();
                None
            }
            SearchEvent::FetchSucceeded { request, items } => {
                if self.settle(request) {
                    info!(
                        "Search request {} returned {} results",
                        request,
                        items.len()
                    );
                    self.phase = SearchPhase::Success(items);
                }
                None
            }
            SearchEvent::FetchFailed { request, message } => {
                if self.settle(request) {
                    error!("Search request {} failed: {}", request, message);
                    if self.policy.on_fetch_failure == FetchFailurePolicy::ShowError {
                        self.phase = SearchPhase::Error(format!("Search failed: {}", message));
                    }
                }
                None
            }
        }
    }

    fn submit(&mut self) -> Option<SearchEffect> {
        match validate_query(&self.query) {
            Err(ValidationError::EmptyQuery) => {
                debug!("Ignoring submit with empty query");
                None
            }
            Err(rejected) => {
                debug!("Query rejected by gate: {:?}", self.query);
                self.phase = SearchPhase::Error(rejected.to_string());
                self.abandon_pending();
                None
            }
            Ok(()) => {
                let request = self.last_issued.next();
                self.last_issued = request;
                if self.policy.ordering == ResponseOrdering::LatestRequestOnly {
                    self.abandon_pending();
                }
                self.pending.push(request);
                self.phase = SearchPhase::Loading;

                info!("Searching for '{}' (request {})", self.query, request);
                Some(SearchEffect::Fetch(request))
            }
        }
    }

    /// Removes `request` from the pending set. Returns false when the
    /// completion must be ignored.
    fn settle(&mut self, request: RequestId) -> bool {
        match self.pending.iter().position(|pending| *pending == request) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => {
                debug!("Discarding completion of abandoned request {}", request);
                false
            }
        }
    }

    fn abandon_pending(&mut self) {
        if !self.pending.is_empty() {
            debug!("Abandoning {} pending request(s)", self.pending.len());
            self.pending.clear();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn policy(&self) -> WorkflowPolicy {
        self.policy
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading)
    }

    /// Message for the error panel, if one should be shown.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Results to render; empty unless the phase is [`SearchPhase::Success`].
    pub fn results(&self) -> &[ResultItem] {
        match &self.phase {
            SearchPhase::Success(items) => items,
            _ => &[],
        }
    }

    pub fn result_count(&self) -> usize {
        self.results().len()
    }

    /// Requests issued but not yet completed or abandoned, oldest first.
    pub fn pending_requests(&self) -> &[RequestId] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_items;

    const CATS_MESSAGE: &str = "No results found for cats. Suggested: 'Statista' or 'statista'.";

    fn state_with_query(policy: WorkflowPolicy, query: &str) -> SearchState {
        let mut state = SearchState::new(policy);
        state.apply(SearchEvent::QueryChanged(query.to_string()));
        state
    }

    fn submit(state: &mut SearchState) -> RequestId {
        match state.apply(SearchEvent::Submit) {
            Some(SearchEffect::Fetch(request)) => request,
            None => panic!("expected a fetch for query {:?}", state.query()),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = SearchState::default();
        assert_eq!(state.query(), "");
        assert_eq!(state.phase(), &SearchPhase::Idle);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_query_changed_keeps_phase() {
        let mut state = state_with_query(WorkflowPolicy::default(), "cats");
        state.apply(SearchEvent::Submit);

        state.apply(SearchEvent::QueryChanged("Statis".into()));
        assert_eq!(state.query(), "Statis");
        assert_eq!(state.error(), Some(CATS_MESSAGE));
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let mut state = SearchState::default();
        let before = state.clone();
        assert_eq!(state.apply(SearchEvent::Submit), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_matching_query_issues_one_fetch() {
        for query in ["Statista", "statista", "STATISTA facts", "my-statista-query"] {
            let mut state = state_with_query(WorkflowPolicy::default(), query);
            let effect = state.apply(SearchEvent::Submit);
            assert_eq!(effect, Some(SearchEffect::Fetch(RequestId::from_u64(1))));
            assert!(state.is_loading());
            assert!(state.error().is_none());
            assert_eq!(state.pending_requests().len(), 1);
        }
    }

    #[test]
    fn test_non_matching_query_sets_error_without_fetch() {
        let mut state = state_with_query(WorkflowPolicy::default(), "cats");
        assert_eq!(state.apply(SearchEvent::Submit), None);
        assert_eq!(state.error(), Some(CATS_MESSAGE));
        assert!(!state.is_loading());
        assert!(state.results().is_empty());
        assert!(state.pending_requests().is_empty());
    }

    #[test]
    fn test_success_stores_items_in_order() {
        let mut state = state_with_query(WorkflowPolicy::default(), "Statista");
        let request = submit(&mut state);
        let items = sample_items(3);

        state.apply(SearchEvent::FetchSucceeded {
            request,
            items: items.clone(),
        });

        assert!(!state.is_loading());
        assert_eq!(state.results(), items.as_slice());
        assert_eq!(state.result_count(), 3);
        assert!(state.pending_requests().is_empty());
    }

    #[test]
    fn test_matching_submit_clears_previous_error_and_results() {
        let mut state = state_with_query(WorkflowPolicy::default(), "cats");
        state.apply(SearchEvent::Submit);
        assert!(state.error().is_some());

        state.apply(SearchEvent::QueryChanged("statista".into()));
        let request = submit(&mut state);
        assert!(state.error().is_none());
        state.apply(SearchEvent::FetchSucceeded {
            request,
            items: sample_items(2),
        });

        let next = submit(&mut state);
        assert!(state.results().is_empty());
        assert_eq!(next, RequestId::from_u64(2));
    }

    #[test]
    fn test_rejected_query_after_success_clears_results() {
        let mut state = state_with_query(WorkflowPolicy::default(), "statista");
        let request = submit(&mut state);
        state.apply(SearchEvent::FetchSucceeded {
            request,
            items: sample_items(2),
        });

        state.apply(SearchEvent::QueryChanged("cats".into()));
        state.apply(SearchEvent::Submit);
        assert_eq!(state.error(), Some(CATS_MESSAGE));
        assert_eq!(state.result_count(), 0);
    }

    #[test]
    fn test_clear_resets_from_every_phase() {
        let policy = WorkflowPolicy::default();

        let mut idle = state_with_query(policy, "typing");
        let mut error = state_with_query(policy, "cats");
        error.apply(SearchEvent::Submit);
        let mut loading = state_with_query(policy, "statista");
        submit(&mut loading);
        let mut success = state_with_query(policy, "statista");
        let request = submit(&mut success);
        success.apply(SearchEvent::FetchSucceeded {
            request,
            items: sample_items(1),
        });

        for state in [&mut idle, &mut error, &mut loading, &mut success] {
            state.apply(SearchEvent::Clear);
            assert_eq!(state.query(), "");
            assert_eq!(state.phase(), &SearchPhase::Idle);
            assert!(state.results().is_empty());
            assert!(state.pending_requests().is_empty());
        }
    }

    #[test]
    fn test_completion_after_clear_is_ignored() {
        for policy in [WorkflowPolicy::default(), WorkflowPolicy::legacy()] {
            let mut state = state_with_query(policy, "statista");
            let request = submit(&mut state);
            state.apply(SearchEvent::Clear);

            state.apply(SearchEvent::FetchSucceeded {
                request,
                items: sample_items(2),
            });
            assert_eq!(state.phase(), &SearchPhase::Idle);
        }
    }

    #[test]
    fn test_failure_keep_loading_never_clears() {
        let mut state = state_with_query(WorkflowPolicy::legacy(), "statista");
        let request = submit(&mut state);

        state.apply(SearchEvent::FetchFailed {
            request,
            message: "Request failed: connection refused".into(),
        });

        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(state.pending_requests().is_empty());
    }

    #[test]
    fn test_failure_show_error() {
        let mut state = state_with_query(WorkflowPolicy::default(), "statista");
        let request = submit(&mut state);

        state.apply(SearchEvent::FetchFailed {
            request,
            message: "Unexpected HTTP status: 500".into(),
        });

        assert!(!state.is_loading());
        assert_eq!(
            state.error(),
            Some("Search failed: Unexpected HTTP status: 500")
        );
    }

    #[test]
    fn test_keep_loading_recovers_on_next_submit() {
        let mut state = state_with_query(WorkflowPolicy::legacy(), "statista");
        let failed = submit(&mut state);
        state.apply(SearchEvent::FetchFailed {
            request: failed,
            message: "boom".into(),
        });

        let retry = submit(&mut state);
        state.apply(SearchEvent::FetchSucceeded {
            request: retry,
            items: sample_items(1),
        });
        assert_eq!(state.result_count(), 1);
    }

    #[test]
    fn test_double_submit_last_resolved_wins() {
        let policy = WorkflowPolicy {
            ordering: ResponseOrdering::LastResolvedWins,
            ..WorkflowPolicy::default()
        };
        let mut state = state_with_query(policy, "statista");
        let first = submit(&mut state);
        let second = submit(&mut state);
        assert_ne!(first, second);
        assert_eq!(state.pending_requests(), &[first, second]);

        let first_items = sample_items(1);
        let second_items = sample_items(4);

        // The second request resolves first, the first resolves last.
        state.apply(SearchEvent::FetchSucceeded {
            request: second,
            items: second_items,
        });
        assert_eq!(state.result_count(), 4);

        state.apply(SearchEvent::FetchSucceeded {
            request: first,
            items: first_items.clone(),
        });
        assert_eq!(state.results(), first_items.as_slice());
    }

    #[test]
    fn test_double_submit_latest_request_only() {
        let mut state = state_with_query(WorkflowPolicy::default(), "statista");
        let first = submit(&mut state);
        let second = submit(&mut state);
        assert_eq!(state.pending_requests(), &[second]);

        let second_items = sample_items(4);
        state.apply(SearchEvent::FetchSucceeded {
            request: second,
            items: second_items.clone(),
        });
        state.apply(SearchEvent::FetchSucceeded {
            request: first,
            items: sample_items(1),
        });

        assert_eq!(state.results(), second_items.as_slice());
    }

    #[test]
    fn test_stale_failure_ignored_with_latest_request_only() {
        let mut state = state_with_query(WorkflowPolicy::default(), "statista");
        let first = submit(&mut state);
        let _second = submit(&mut state);

        state.apply(SearchEvent::FetchFailed {
            request: first,
            message: "timeout".into(),
        });
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_rejected_query_abandons_pending_fetch() {
        let mut state = state_with_query(WorkflowPolicy::legacy(), "statista");
        let request = submit(&mut state);

        state.apply(SearchEvent::QueryChanged("dogs".into()));
        state.apply(SearchEvent::Submit);
        state.apply(SearchEvent::FetchSucceeded {
            request,
            items: sample_items(3),
        });

        assert_eq!(
            state.error(),
            Some("No results found for dogs. Suggested: 'Statista' or 'statista'.")
        );
        assert!(state.results().is_empty());
    }
}

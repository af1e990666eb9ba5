//! Sequential driver for a search controller.
//!
//! [`SearchSession`] owns a [`SearchState`] and a [`SearchSource`] and runs each
//! effect to completion before returning. Front ends with their own event loop
//! (the Dioxus app) drive [`SearchState::apply`] directly instead.

use crate::source::{perform_fetch, SearchSource};
use crate::workflow::{SearchEffect, SearchEvent, SearchState, WorkflowPolicy};

pub struct SearchSession<S> {
    state: SearchState,
    source: S,
}

impl<S: SearchSource> SearchSession<S> {
    pub fn new(source: S, policy: WorkflowPolicy) -> Self {
        Self {
            state: SearchState::new(policy),
            source,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.apply(SearchEvent::QueryChanged(query.into()));
    }

    pub fn clear(&mut self) {
        self.state.apply(SearchEvent::Clear);
    }

    /// Submits the current query and, if it passes the gate, waits for the
    /// fetch and applies its outcome.
    pub async fn submit(&mut self) -> &SearchState {
        if let Some(SearchEffect::Fetch(request)) = self.state.apply(SearchEvent::Submit) {
            let completion = perform_fetch(&self.source, request).await;
            self.state.apply(completion);
        }
        &self.state
    }

    /// Replaces the query and submits it.
    pub async fn search(&mut self, query: impl Into<String>) -> &SearchState {
        self.set_query(query);
        self.submit().await
    }

    pub fn into_state(self) -> SearchState {
        self.state
    }
}

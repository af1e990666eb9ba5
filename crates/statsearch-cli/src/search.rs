//! Search command implementation.
//!
//! Runs one submission through the shared workflow controller and reduces the
//! final state to something the terminal can show.

use anyhow::{Context, Result};
use statsearch_core::{
    validate_query, HttpSearchSource, SearchConfig, SearchDisplay, SearchPhase, SearchSession,
    SearchSource, ValidationError,
};
use tracing::info;

/// How a single CLI search ended.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Fetch applied; display may hold zero cards
    Results(SearchDisplay),
    /// Query failed the gate; carries the user-facing message
    Rejected(String),
    /// Fetch failed and the policy surfaced it
    Failed(String),
    /// Fetch failed under the keep-loading policy
    StillLoading,
}

/// Performs a search against the configured endpoint.
pub async fn execute_search(query: &str, config: &SearchConfig) -> Result<SearchOutcome> {
    let source = HttpSearchSource::new(config)
        .with_context(|| format!("Invalid search endpoint: {}", config.endpoint))?;
    info!("Using endpoint {}", source.endpoint());

    Ok(run_search(source, query, config).await)
}

async fn run_search<S: SearchSource>(
    source: S,
    query: &str,
    config: &SearchConfig,
) -> SearchOutcome {
    let passed_gate = match validate_query(query) {
        Err(ValidationError::EmptyQuery) => {
            return SearchOutcome::Rejected(ValidationError::EmptyQuery.to_string())
        }
        gate => gate.is_ok(),
    };

    let mut session = SearchSession::new(source, config.policy);
    let state = session.search(query).await;

    match state.phase() {
        SearchPhase::Loading => SearchOutcome::StillLoading,
        SearchPhase::Error(message) if !passed_gate => SearchOutcome::Rejected(message.clone()),
        SearchPhase::Error(message) => SearchOutcome::Failed(message.clone()),
        SearchPhase::Idle | SearchPhase::Success(_) => {
            SearchOutcome::Results(SearchDisplay::from_state(state))
        }
    }
}

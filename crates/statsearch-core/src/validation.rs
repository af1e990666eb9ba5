//! The query gate.
//!
//! Only queries containing [`MATCH_TOKEN`] (any letter case, anywhere in the
//! string) are allowed to reach the endpoint. This emulates a backend that
//! only has results for that term; it is not a relevance filter.

use thiserror::Error;

use crate::config::MATCH_TOKEN;

/// Why a query was rejected before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing was typed. The form's required-field check blocks this, so the
    /// controller treats it as a no-op rather than an error.
    #[error("Please enter a search term.")]
    EmptyQuery,
    /// Query does not contain the match token. `Display` is the user-facing
    /// message shown in the error panel.
    #[error("No results found for {query}. Suggested: 'Statista' or 'statista'.")]
    NoMatch { query: String },
}

/// Runs the gate on a raw query.
///
/// The query is not trimmed: a whitespace-only query is non-empty and is
/// rejected with [`ValidationError::NoMatch`].
pub fn validate_query(query: &str) -> Result<(), ValidationError> {
    if query.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    if query.to_lowercase().contains(MATCH_TOKEN) {
        Ok(())
    } else {
        Err(ValidationError::NoMatch {
            query: query.to_string(),
        })
    }
}

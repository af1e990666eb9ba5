//! Configuration constants and runtime configuration.
//!
//! # Usage
//!
//! ```
//! use statsearch_core::config::{SearchConfig, DEFAULT_ENDPOINT};
//!
//! let config = SearchConfig::default();
//! assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
//! assert!(config.request_timeout.is_none());
//! ```

use std::time::Duration;

use crate::workflow::WorkflowPolicy;

// =============================================================================
// Remote endpoint
// =============================================================================

/// Fixed search results endpoint.
///
/// The query is never sent; every request returns the same payload.
pub const DEFAULT_ENDPOINT: &str =
    "https://cdn.statcdn.com/static/application/search_results.json";

/// User agent sent by native builds.
pub const USER_AGENT: &str = concat!("Statsearch/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Query gate
// =============================================================================

/// Token a query must contain (case-insensitive) to reach the endpoint.
pub const MATCH_TOKEN: &str = "statista";

// =============================================================================
// Card text
// =============================================================================

/// Publisher shown in every card's attribution line.
pub const PUBLISHER: &str = "Statista";

/// Copyright notice shown in every card's footer.
pub const COPYRIGHT: &str = "© Statista 2021";

/// Footer sentence following the copyright notice.
pub const FOOTER_NOTE: &str = "For details, please refer to the full article.";

/// Runtime configuration shared by the front ends.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// URL fetched on every accepted submission
    pub endpoint: String,
    /// Per-request timeout. `None` waits for as long as the request takes.
    /// Ignored on wasm, where the browser owns request lifetimes.
    pub request_timeout: Option<Duration>,
    /// How the controller treats failures and overlapping responses
    pub policy: WorkflowPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: None,
            policy: WorkflowPolicy::default(),
        }
    }
}

impl SearchConfig {
    /// Replaces the endpoint, keeping everything else.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_policy(mut self, policy: WorkflowPolicy) -> Self {
        self.policy = policy;
        self
    }
}

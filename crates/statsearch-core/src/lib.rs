//! # Statsearch Core
//!
//! Platform-independent library behind the Statsearch front ends.
//!
//! This crate owns the search-submission workflow: the query gate, the remote
//! lookup, and the projection of results into display cards. Front ends (the
//! Dioxus app and the CLI) feed user actions and network outcomes into
//! [`workflow::SearchState::apply`] and render [`render::SearchDisplay`].
//!
//! ## Modules
//!
//! - [`workflow`] - Search state machine (reducer + request tracking)
//! - [`validation`] - The `"statista"` query gate
//! - [`source`] - Remote fetcher trait and the HTTP implementation
//! - [`session`] - Async driver that runs a controller against a source
//! - [`render`] - Result cards and display-mode projection
//! - [`types`] - Wire and domain data model
//! - [`config`] - Constants and runtime configuration
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod source;
pub mod types;
pub mod validation;
pub mod workflow;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::SearchConfig;
pub use error::FetchError;
pub use render::{render_cards, results_counter_text, DisplayMode, ResultCard, SearchDisplay};
pub use session::SearchSession;
pub use source::{perform_fetch, HttpSearchSource, SearchSource};
pub use types::{ImageVariant, RequestId, ResultItem, SearchResponse};
pub use validation::{validate_query, ValidationError};
pub use workflow::{
    FetchFailurePolicy, ResponseOrdering, SearchEffect, SearchEvent, SearchPhase, SearchState,
    WorkflowPolicy,
};

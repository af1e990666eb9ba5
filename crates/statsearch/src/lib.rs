//! Statsearch - single-page search front end.
//!
//! A Dioxus application (web and desktop) around the workflow controller in
//! `statsearch-core`. The user enters a query, the app fetches the fixed
//! results endpoint when the query passes the gate, and results are rendered
//! as cards.
//!
//! All interaction state lives in one `Signal<SearchState>` provided at the
//! root; components read it and send events through
//! [`statsearch_core::SearchState::apply`].

#![forbid(unsafe_code)]

pub mod components;

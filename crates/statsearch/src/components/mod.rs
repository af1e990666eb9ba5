//! UI components for the Statsearch application.
//!
//! - `search`: SearchView, SearchCard, ResultCard and the status panels
//!
//! # Context Providers
//!
//! [`App`] provides two contexts for the component tree:
//!
//! ```ignore
//! // Shared interaction state; mutate only through `apply`
//! let mut state = use_search_state();
//! let effect = state.write().apply(SearchEvent::Submit);
//!
//! // Remote source used to perform fetch effects
//! let source = use_search_source();
//! let completion = source.fetch(request).await;
//! ```

pub mod search;

pub use search::SearchView;

use std::rc::Rc;

use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use statsearch_core::{
    perform_fetch, HttpSearchSource, RequestId, SearchConfig, SearchEvent, SearchSource,
    SearchState,
};

/// The remote source shared by all fetch tasks.
///
/// `None` when the source could not be built; every fetch then completes with
/// a failure so the controller's failure policy applies as usual.
#[derive(Clone)]
pub struct SearchSourceContext(Option<Rc<dyn SearchSource>>);

impl SearchSourceContext {
    pub fn from_config(config: &SearchConfig) -> Self {
        match HttpSearchSource::new(config) {
            Ok(source) => {
                let source: Rc<dyn SearchSource> = Rc::new(source);
                Self(Some(source))
            }
            Err(e) => {
                error!("❌ Failed to create search source: {}", e);
                Self(None)
            }
        }
    }

    /// Performs the fetch for `request` and returns its completion event.
    pub async fn fetch(&self, request: RequestId) -> SearchEvent {
        match &self.0 {
            Some(source) => perform_fetch(source.as_ref(), request).await,
            None => SearchEvent::FetchFailed {
                request,
                message: "Search source unavailable".to_string(),
            },
        }
    }
}

// Search state context provider
pub fn use_search_state() -> Signal<SearchState> {
    use_context::<Signal<SearchState>>()
}

// Search source context provider
pub fn use_search_source() -> SearchSourceContext {
    use_context::<SearchSourceContext>()
}

/// Root component: provides state and source, then renders the search page.
#[component]
pub fn App() -> Element {
    let config = use_hook(SearchConfig::default);

    let search_state = use_signal(|| SearchState::new(config.policy));
    use_context_provider(|| search_state);

    use_context_provider(|| SearchSourceContext::from_config(&config));

    rsx! {
        div { class: "App",
            SearchView {}
        }
    }
}

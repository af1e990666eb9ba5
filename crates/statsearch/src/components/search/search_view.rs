use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use statsearch_core::{RequestId, SearchDisplay, SearchEffect, SearchEvent};

use crate::components::{use_search_source, use_search_state};

use super::{ErrorPanel, LoadingIndicator, ResultCard, ResultsCounter, SearchCard};

// Messages for fetch coroutine
enum FetchMessage {
    Fetch(RequestId),
}

/// Search page: form, error panel, counter, loading indicator and results
#[component]
pub fn SearchView() -> Element {
    let mut search_state = use_search_state();
    let source = use_search_source();

    // Fetch coroutine - each request gets its own task so overlapping
    // submissions run concurrently; the controller decides which completion
    // is applied.
    let fetch_task = use_coroutine({
        let state = search_state;

        move |mut rx: UnboundedReceiver<FetchMessage>| {
            let source = source.clone();
            async move {
                while let Some(msg) = rx.next().await {
                    match msg {
                        FetchMessage::Fetch(request) => {
                            let source = source.clone();
                            let mut state = state;
                            spawn(async move {
                                let completion = source.fetch(request).await;
                                state.write().apply(completion);
                            });
                        }
                    }
                }
            }
        }
    });

    let handle_query_change = move |query: String| {
        search_state.write().apply(SearchEvent::QueryChanged(query));
    };

    let handle_submit = move |_: ()| {
        let effect = search_state.write().apply(SearchEvent::Submit);
        if let Some(SearchEffect::Fetch(request)) = effect {
            fetch_task.send(FetchMessage::Fetch(request));
        }
    };

    let handle_clear = move |_: ()| {
        debug!("Clearing search");
        search_state.write().apply(SearchEvent::Clear);
    };

    // Determine what to show
    let query = search_state.read().query().to_string();
    let display = SearchDisplay::from_state(&search_state.read());
    let error_message = display.error().map(str::to_string);
    let result_count = display.cards.len();
    let show_counter = display.counter.is_some();
    let loading = display.is_loading();

    rsx! {
        div { id: "search-container",
            SearchCard {
                query,
                on_query_change: handle_query_change,
                on_submit: handle_submit,
                on_clear: handle_clear,
            }

            if let Some(message) = error_message {
                ErrorPanel { message }
            }

            if show_counter {
                ResultsCounter { count: result_count }
            }

            if loading {
                LoadingIndicator {}
            }

            div { id: "results-container",
                for card in display.cards.iter() {
                    ResultCard {
                        key: "{card.identifier}",
                        card: card.clone(),
                    }
                }
            }
        }
    }
}

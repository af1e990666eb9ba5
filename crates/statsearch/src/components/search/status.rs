use dioxus::prelude::*;

/// Shown while a fetch is pending
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { id: "loading", "Loading..." }
    }
}

/// User-visible error message (rejected query or surfaced fetch failure)
#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div { id: "error-panel", "{message}" }
    }
}

/// "N results matched your search criteria." with the count emphasized
#[component]
pub fn ResultsCounter(count: usize) -> Element {
    rsx! {
        div { id: "results-counter",
            small {
                strong { "{count}" }
                " results matched your search criteria."
            }
        }
    }
}

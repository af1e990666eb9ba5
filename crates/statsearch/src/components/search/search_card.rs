use dioxus::prelude::*;

/// Search form: required text input, Search (submit) and Clear
#[component]
pub fn SearchCard(
    query: String,
    on_query_change: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        div { id: "search-bar",
            h1 { id: "search-bar-title", "My Statista SearchApp" }
            form {
                id: "search-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                input {
                    id: "search-term",
                    name: "search-term",
                    r#type: "text",
                    placeholder: "Enter a search term (suggested: 'Statista' or 'statista')",
                    value: "{query}",
                    required: true,
                    oninput: move |evt| on_query_change.call(evt.value()),
                }
                button { class: "btn", id: "btn-search", r#type: "submit", "Search" }
                button {
                    class: "btn",
                    id: "btn-clear",
                    r#type: "button",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_clear.call(());
                    },
                    "Clear"
                }
            }
        }
    }
}

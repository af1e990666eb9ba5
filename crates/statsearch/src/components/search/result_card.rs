use dioxus::prelude::*;
use statsearch_core::render::ResultCard as CardData;

/// One search result.
///
/// Title and footer link open the article in a new tab. The image block is
/// omitted entirely when the result has no image variants.
#[component]
pub fn ResultCard(card: CardData) -> Element {
    rsx! {
        article { class: "result-card",
            div { class: "result-header",
                a {
                    class: "result-title",
                    target: "_blank",
                    rel: "noreferrer",
                    href: "{card.link}",
                    "{card.title}"
                }
                small {
                    "Published by "
                    em { "{card.publisher}" }
                    ", on "
                    strong { "{card.date}" }
                }
            }

            div { class: "result-content",
                p { class: "result-subject",
                    em { "{card.subject}" }
                }
                if let Some(image) = card.image.clone() {
                    div { class: "result-image-container",
                        img {
                            class: "result-image",
                            src: "{image.src}",
                            width: "{image.width}",
                            alt: "{image.alt}",
                        }
                    }
                }
                p { class: "result-description", "{card.description}" }
            }

            div { class: "result-footer",
                small { class: "result-link",
                    strong { "{card.copyright}" }
                    " - For details, please refer to the "
                    a {
                        target: "_blank",
                        rel: "noreferrer",
                        href: "{card.link}",
                        "full article"
                    }
                    "."
                }
            }
        }
    }
}

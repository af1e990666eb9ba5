//! Output formatting for search results.
//!
//! Supports both human-readable terminal output and JSON for scripting. Both
//! render the same cards as the web front end.

use serde::Serialize;
use statsearch_core::render::{ResultCard, SearchDisplay};

/// Maximum characters to show of a card description
const DESCRIPTION_MAX_LEN: usize = 200;

/// JSON output structure for search results
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub query: &'a str,
    pub count: usize,
    pub results: &'a [ResultCard],
}

/// Formats search results as JSON.
pub fn format_json(query: &str, display: &SearchDisplay) -> String {
    let output = JsonOutput {
        query,
        count: display.cards.len(),
        results: &display.cards,
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats search results for human-readable terminal output.
pub fn format_human(query: &str, display: &SearchDisplay) -> String {
    let Some(counter) = display.counter.as_deref() else {
        return format!("No results returned for \"{}\"", query);
    };

    let mut output = String::new();
    output.push_str(counter);
    output.push_str("\n\n");

    for (i, card) in display.cards.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, card.title));
        output.push_str(&format!("   {}\n", card.link));
        output.push_str(&format!("   {}\n", card.attribution()));
        output.push_str(&format!("   {}\n", card.subject));

        if let Some(image) = &card.image {
            output.push_str(&format!("   Image: {} ({}px)\n", image.src, image.width));
        }

        let description = truncate_text(&card.description, DESCRIPTION_MAX_LEN);
        output.push_str(&format!("   {}\n", indent_text(&description, "   ")));
        output.push_str(&format!("   {}\n", card.footer()));
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Truncates text to a maximum number of characters, adding ellipsis if needed.
fn truncate_text(text: &str, max_len: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_len).collect();
    // Find a word boundary near max_len
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}

/// Indents all lines of text after the first line.
fn indent_text(text: &str, indent: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use statsearch_core::render::DisplayMode;
    use statsearch_core::test_utils::sample_items;
    use statsearch_core::{render_cards, results_counter_text};

    fn display_with(count: usize) -> SearchDisplay {
        let cards = render_cards(&sample_items(count));
        SearchDisplay {
            mode: if count == 0 {
                DisplayMode::Idle
            } else {
                DisplayMode::Results
            },
            counter: (count > 0).then(|| results_counter_text(count)),
            cards,
        }
    }

    #[test]
    fn test_format_human_empty() {
        let output = format_human("statista", &display_with(0));
        assert!(output.contains("No results returned"));
    }

    #[test]
    fn test_format_human_cards() {
        let output = format_human("Statista", &display_with(2));
        assert!(output.starts_with("2 results matched your search criteria."));
        assert!(output.contains("1. Statista result 1"));
        assert!(output.contains("2. Statista result 2"));
        assert!(output.contains("Published by Statista, on 2021-01-01"));
        assert!(output.contains("Image: https://cdn.statcdn.com/1001-355.png (355px)"));
        assert!(output.contains("© Statista 2021 - For details, please refer to the full article."));
    }

    #[test]
    fn test_format_human_without_image() {
        let mut display = display_with(1);
        display.cards[0].image = None;
        let output = format_human("statista", &display);
        assert!(!output.contains("Image:"));
    }

    #[test]
    fn test_format_json() {
        let output = format_json("statista", &display_with(1));
        assert!(output.contains("\"query\": \"statista\""));
        assert!(output.contains("\"count\": 1"));
        assert!(output.contains("\"identifier\": \"1001\""));
        assert!(output.contains("\"publisher\": \"Statista\""));
        assert!(output.contains("\"width\": 355"));
    }

    #[test]
    fn test_truncate_text() {
        let short = "Short text";
        assert_eq!(truncate_text(short, 50), short);

        let long = "This is a much longer text that should be truncated at a reasonable point";
        let truncated = truncate_text(long, 30);
        assert!(truncated.ends_with("..."));
        assert!(truncated.chars().count() <= 33); // 30 + "..."
    }

    #[test]
    fn test_truncate_multibyte() {
        let text = "Ä".repeat(10);
        assert_eq!(truncate_text(&text, 4), format!("{}...", "Ä".repeat(4)));
    }
}

//! Result rendering.
//!
//! Pure projections from controller state to what a front end shows. Nothing
//! here holds state; the Dioxus components and the CLI formatter both consume
//! these view models so the two front ends display identical text.

use serde::Serialize;

use crate::config::{COPYRIGHT, FOOTER_NOTE, PUBLISHER};
use crate::types::ResultItem;
use crate::workflow::{SearchPhase, SearchState};

/// Image shown on a card (the first variant of the result).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardImage {
    pub src: String,
    pub width: u32,
    /// Alternative text; the result's subject
    pub alt: String,
}

/// Display card for one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    /// Render key
    pub identifier: String,
    pub title: String,
    /// External link for the title and the footer
    pub link: String,
    pub publisher: String,
    pub date: String,
    pub subject: String,
    /// Absent when the result has no image variants
    pub image: Option<CardImage>,
    pub description: String,
    pub copyright: String,
}

impl ResultCard {
    /// `"Published by Statista, on {date}"`
    pub fn attribution(&self) -> String {
        format!("Published by {}, on {}", self.publisher, self.date)
    }

    /// `"© Statista 2021 - For details, please refer to the full article."`
    pub fn footer(&self) -> String {
        format!("{} - {}", self.copyright, FOOTER_NOTE)
    }
}

impl From<&ResultItem> for ResultCard {
    fn from(item: &ResultItem) -> Self {
        Self {
            identifier: item.identifier.clone(),
            title: item.title.clone(),
            link: item.link.clone(),
            publisher: PUBLISHER.to_string(),
            date: item.date.clone(),
            subject: item.subject.clone(),
            image: item.primary_image().map(|image| CardImage {
                src: image.src.clone(),
                width: image.width,
                alt: item.subject.clone(),
            }),
            description: item.description.clone(),
            copyright: COPYRIGHT.to_string(),
        }
    }
}

/// Projects results to cards, preserving order.
pub fn render_cards(items: &[ResultItem]) -> Vec<ResultCard> {
    items.iter().map(ResultCard::from).collect()
}

/// Text of the results counter.
pub fn results_counter_text(count: usize) -> String {
    format!("{} results matched your search criteria.", count)
}

/// Which panel is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DisplayMode {
    Idle,
    Loading,
    Error(String),
    Results,
}

/// Everything a front end needs to draw the page below the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchDisplay {
    pub mode: DisplayMode,
    /// Present iff there is at least one card
    pub counter: Option<String>,
    pub cards: Vec<ResultCard>,
}

impl SearchDisplay {
    pub fn from_state(state: &SearchState) -> Self {
        let mode = match state.phase() {
            SearchPhase::Idle => DisplayMode::Idle,
            SearchPhase::Loading => DisplayMode::Loading,
            SearchPhase::Error(message) => DisplayMode::Error(message.clone()),
            // An empty success renders like idle: no counter, no list.
            SearchPhase::Success(items) if items.is_empty() => DisplayMode::Idle,
            SearchPhase::Success(_) => DisplayMode::Results,
        };

        let cards = render_cards(state.results());
        let counter = (!cards.is_empty()).then(|| results_counter_text(cards.len()));

        Self {
            mode,
            counter,
            cards,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.mode == DisplayMode::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.mode {
            DisplayMode::Error(message) => Some(message),
            _ => None,
        }
    }
}

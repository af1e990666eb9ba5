//! Search view components: SearchView, SearchCard, ResultCard, status panels

mod result_card;
mod search_card;
mod search_view;
mod status;

pub use result_card::ResultCard;
pub use search_card::SearchCard;
pub use search_view::SearchView;
pub use status::{ErrorPanel, LoadingIndicator, ResultsCounter};

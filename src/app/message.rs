use crate::error::{DetailError, SearchError};
use crate::model::{MealDetail, MealSummary, SearchMode};
use crate::search::SearchOutcome;

/// Everything that can change [`AppState`](super::AppState)
#[derive(Debug)]
pub enum Message {
    /// User edited the search box
    QueryChanged(String),
    /// User picked a search mode
    ModeChanged(SearchMode),
    /// User clicked Search or pressed Enter
    SubmitSearch,
    /// User asked for a meal's details
    ViewMeal(String),
    /// User clicked Favorite/Unfavorite
    ToggleFavorite(MealSummary),
    /// A search request finished
    SearchCompleted {
        seq: u64,
        result: Result<SearchOutcome, SearchError>,
    },
    /// A detail request finished
    DetailCompleted {
        seq: u64,
        result: Result<MealDetail, DetailError>,
    },
}

/// Side effect requested by `update`, run outside the state container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search {
        seq: u64,
        query: String,
        mode: SearchMode,
    },
    LoadDetail {
        seq: u64,
        id: String,
    },
}

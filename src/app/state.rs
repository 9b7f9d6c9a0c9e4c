use crate::favorites::Favorites;
use crate::model::{MealDetail, MealSummary, SearchMode};

/// Where the search concern is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    /// Last search returned meals
    Results,
    /// Last search matched nothing
    Empty,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub mode: SearchMode,
    pub status: SearchStatus,
    pub results: Vec<MealSummary>,
    /// User-facing message for `Empty` and `Failed`
    pub error: Option<String>,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailStatus {
    #[default]
    None,
    Loading,
    Loaded,
    Failed,
}

/// The selected meal, if any
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub status: DetailStatus,
    pub meal: Option<MealDetail>,
    pub error: Option<String>,
}

/// Everything the view is derived from.
///
/// Only [`update`](super::update::update) mutates it. Each concern carries the
/// sequence number of its latest request; completions with an older number
/// are dropped.
pub struct AppState {
    pub search: SearchState,
    pub detail: DetailState,
    pub favorites: Favorites,
    pub(crate) search_seq: u64,
    pub(crate) detail_seq: u64,
}

impl AppState {
    pub fn new(favorites: Favorites) -> Self {
        AppState {
            search: SearchState::default(),
            detail: DetailState::default(),
            favorites,
            search_seq: 0,
            detail_seq: 0,
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Result card by 1-based position
    pub fn result_at(&self, position: usize) -> Option<&MealSummary> {
        position
            .checked_sub(1)
            .and_then(|index| self.search.results.get(index))
    }

    /// Favorite by 1-based position
    pub fn favorite_at(&self, position: usize) -> Option<&MealSummary> {
        position
            .checked_sub(1)
            .and_then(|index| self.favorites.list().get(index))
    }
}

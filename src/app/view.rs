//! Derives a plain view model from [`AppState`] and renders it as text.

use std::fmt;

use super::state::{AppState, DetailStatus};
use crate::model::{Ingredient, MealDetail};

/// One result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    /// "Favorite" or "Unfavorite"
    pub favorite_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteView {
    pub position: usize,
    pub name: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// Nothing selected, or a fetch is in flight
    Placeholder { loading: bool },
    Loaded(MealDetail),
    Failed(String),
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub mode_label: &'static str,
    pub query: String,
    /// "Search" or "Searching..."
    pub button_label: &'static str,
    pub error: Option<String>,
    pub loading: bool,
    pub cards: Vec<CardView>,
    pub favorites: Vec<FavoriteView>,
    pub detail: DetailView,
}

pub fn render(state: &AppState) -> ViewModel {
    let loading = state.search.is_loading();

    let cards = state
        .search
        .results
        .iter()
        .enumerate()
        .map(|(i, meal)| CardView {
            position: i + 1,
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail_url: meal.thumbnail_url.clone(),
            favorite_label: if state.is_favorite(&meal.id) {
                "Unfavorite"
            } else {
                "Favorite"
            },
        })
        .collect();

    let favorites = state
        .favorites
        .list()
        .iter()
        .enumerate()
        .map(|(i, meal)| FavoriteView {
            position: i + 1,
            name: meal.name.clone(),
            thumbnail_url: meal.thumbnail_url.clone(),
        })
        .collect();

    let detail = match (&state.detail.status, &state.detail.meal) {
        (DetailStatus::Loaded, Some(meal)) => DetailView::Loaded(meal.clone()),
        (DetailStatus::Failed, _) => {
            DetailView::Failed(state.detail.error.clone().unwrap_or_default())
        }
        (status, _) => DetailView::Placeholder {
            loading: *status == DetailStatus::Loading,
        },
    };

    ViewModel {
        mode_label: state.search.mode.as_str(),
        query: state.search.query.clone(),
        button_label: if loading { "Searching..." } else { "Search" },
        error: state.search.error.clone(),
        loading,
        cards,
        favorites,
        detail,
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe Finder")?;
        writeln!(f, "=============")?;
        writeln!(f, "[{}] {}  <{}>", self.mode_label, self.query, self.button_label)?;
        if let Some(error) = &self.error {
            writeln!(f, "! {}", error)?;
        }
        if self.loading {
            writeln!(f, "Loading...")?;
        }

        writeln!(f)?;
        writeln!(f, "Results ({})", self.cards.len())?;
        for card in &self.cards {
            writeln!(f, "  {:>2}. {}  [View] [{}]", card.position, card.name, card.favorite_label)?;
            writeln!(f, "      {}", card.thumbnail_url)?;
        }

        writeln!(f)?;
        writeln!(f, "Favorites")?;
        if self.favorites.is_empty() {
            writeln!(f, "  No favorites yet")?;
        }
        for favorite in &self.favorites {
            writeln!(f, "  {:>2}. {}", favorite.position, favorite.name)?;
        }

        writeln!(f)?;
        writeln!(f, "Meal Details")?;
        match &self.detail {
            DetailView::Placeholder { loading: true } => writeln!(f, "  Loading details...")?,
            DetailView::Placeholder { loading: false } => {
                writeln!(f, "  Select a meal to view details")?
            }
            DetailView::Failed(error) => writeln!(f, "  ! {}", error)?,
            DetailView::Loaded(meal) => write_detail(f, meal)?,
        }

        writeln!(f)?;
        write!(f, "Built using TheMealDB API")
    }
}

fn write_detail(f: &mut fmt::Formatter<'_>, meal: &MealDetail) -> fmt::Result {
    writeln!(f, "  {}", meal.name)?;
    writeln!(f, "  {}", meal.thumbnail_url)?;
    writeln!(f, "  Category: {}", meal.category)?;
    writeln!(f, "  Area: {}", meal.area)?;
    writeln!(f, "  Ingredients")?;
    for Ingredient { name, measure } in &meal.ingredients {
        writeln!(f, "   - {} – {}", name, measure)?;
    }
    writeln!(f, "  Instructions")?;
    for line in meal.instructions.lines().filter(|l| !l.trim().is_empty()) {
        writeln!(f, "  {}", line.trim())?;
    }
    Ok(())
}

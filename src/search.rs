use std::sync::Arc;

use log::{debug, info};

use crate::error::SearchError;
use crate::model::{MealSummary, SearchMode};
use crate::service::RecipeService;

/// Notice shown when a search matched nothing
pub const NO_RESULTS_MESSAGE: &str = "No recipes found.";

/// Result of a search that reached the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<MealSummary>),
    /// The service reported no match; any previous results are stale
    NoResults,
}

impl SearchOutcome {
    pub fn meals(&self) -> &[MealSummary] {
        match self {
            SearchOutcome::Found(meals) => meals,
            SearchOutcome::NoResults => &[],
        }
    }

    pub fn into_meals(self) -> Vec<MealSummary> {
        match self {
            SearchOutcome::Found(meals) => meals,
            SearchOutcome::NoResults => Vec::new(),
        }
    }
}

/// Turns (query, mode) into a single service request
#[derive(Clone)]
pub struct SearchController {
    service: Arc<dyn RecipeService>,
}

impl SearchController {
    pub fn new(service: Arc<dyn RecipeService>) -> Self {
        SearchController { service }
    }

    /// Search the service.
    ///
    /// A blank query fails with [`SearchError::EmptyQuery`] without a request.
    /// A missing or empty `meals` list is [`SearchOutcome::NoResults`].
    pub async fn search(&self, query: &str, mode: SearchMode) -> Result<SearchOutcome, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        debug!(
            "Searching {} by {} for {:?}",
            self.service.service_name(),
            mode.as_str(),
            query
        );
        let meals = self
            .service
            .search(mode, query)
            .await
            .map_err(SearchError::Network)?;

        match meals {
            Some(meals) if !meals.is_empty() => {
                info!("Found {} meals for {:?}", meals.len(), query);
                Ok(SearchOutcome::Found(meals))
            }
            _ => Ok(SearchOutcome::NoResults),
        }
    }
}

//! Recipe search over TheMealDB with a persisted favorites list.
//!
//! The library is split into the service client ([`service`]), the three
//! request-level components ([`SearchController`], [`DetailLoader`],
//! [`Favorites`]) and an explicit state container in [`app`] that the
//! terminal binary drives.

pub mod app;
pub mod builder;
pub mod config;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

use std::sync::Arc;

pub use app::App;
pub use builder::{AppBuilder, RecipeFinder};
pub use config::AppConfig;
pub use detail::DetailLoader;
pub use error::{AppError, DetailError, SearchError, ServiceError, StoreError};
pub use favorites::{toggle_favorite, Favorites};
pub use model::{Ingredient, MealDetail, MealSummary, SearchMode};
pub use search::{SearchController, SearchOutcome};
pub use service::{MealDbClient, RecipeService};
pub use store::{FavoritesStore, FileStore, MemoryStore};

/// Search TheMealDB with the default [`config::ApiConfig`] (user agent, timeout).
///
/// # Example
/// ```no_run
/// # use recipe_finder::{search_meals, SearchMode};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = search_meals("chicken", SearchMode::Ingredient).await?;
/// println!("{} meals", outcome.meals().len());
/// # Ok(())
/// # }
/// ```
pub async fn search_meals(query: &str, mode: SearchMode) -> Result<SearchOutcome, SearchError> {
    let client = default_client().map_err(|e| SearchError::Network(ServiceError::Request(e)))?;
    SearchController::new(Arc::new(client)).search(query, mode).await
}

/// Look up one meal on TheMealDB with the default [`config::ApiConfig`].
pub async fn lookup_meal(id: &str) -> Result<MealDetail, DetailError> {
    let client = default_client().map_err(|e| DetailError::Network(ServiceError::Request(e)))?;
    DetailLoader::new(Arc::new(client)).load_detail(id).await
}

fn default_client() -> Result<MealDbClient, reqwest::Error> {
    MealDbClient::new(&AppConfig::default().api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_client_uses_configured_timeout() {
        let client = default_client().unwrap();
        assert_eq!(client.base_url(), service::DEFAULT_BASE_URL);
        assert_eq!(client.timeout(), Some(Duration::from_secs(30)));
    }
}

use std::sync::Arc;
use std::time::Duration;

use crate::app::App;
use crate::config::{ApiConfig, AppConfig};
use crate::favorites::Favorites;
use crate::model::SearchMode;
use crate::service::{MealDbClient, RecipeService};
use crate::store::{FavoritesStore, FileStore};
use crate::AppError;

/// Builder for configuring and creating an [`App`]
#[derive(Default)]
pub struct AppBuilder {
    config: AppConfig,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    service: Option<Arc<dyn RecipeService>>,
    store: Option<Box<dyn FavoritesStore>>,
    default_search: Option<(String, SearchMode)>,
}

impl AppBuilder {
    /// Start from a loaded configuration
    ///
    /// Values set with the other builder methods take precedence.
    pub fn config(mut self, config: &AppConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Set the recipe service base URL
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom recipe service instead of the HTTP client
    pub fn service(mut self, service: Arc<dyn RecipeService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Use a custom favorites store instead of the configured directory
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{MemoryStore, RecipeFinder};
    ///
    /// let builder = RecipeFinder::builder().store(Box::new(MemoryStore::new()));
    /// ```
    pub fn store(mut self, store: Box<dyn FavoritesStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the search issued by [`App::start`]
    pub fn default_search(mut self, query: impl Into<String>, mode: SearchMode) -> Self {
        self.default_search = Some((query.into(), mode));
        self
    }

    /// Create the application
    ///
    /// # Errors
    /// Returns `AppError::Client` if the HTTP client cannot be created.
    pub fn build(self) -> Result<App, AppError> {
        let timeout = self.request_timeout(&self.config.api);
        let mut api = self.config.api.clone();
        if let Some(base_url) = self.base_url {
            api.base_url = base_url;
        }
        if let Some(user_agent) = self.user_agent {
            api.user_agent = user_agent;
        }

        let service: Arc<dyn RecipeService> = match self.service {
            Some(service) => service,
            None => Arc::new(MealDbClient::with_timeout(&api, timeout)?),
        };

        let store: Box<dyn FavoritesStore> = match self.store {
            Some(store) => store,
            None => Box::new(FileStore::new(
                &self.config.storage.dir,
                self.config.storage.key.as_str(),
            )),
        };

        let (query, mode) = self.default_search.unwrap_or_else(|| {
            (
                self.config.startup.default_query.clone(),
                self.config.startup.mode(),
            )
        });

        Ok(App::new(service, Favorites::load(store), query, mode))
    }

    /// Builder timeout if set, otherwise the configured whole seconds
    fn request_timeout(&self, api: &ApiConfig) -> Duration {
        self.timeout.unwrap_or_else(|| Duration::from_secs(api.timeout))
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for the application
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_build_loads_favorites_from_store() {
        let store = MemoryStore::with_raw(r#"[{"idMeal":"1","strMeal":"Soup","strMealThumb":""}]"#);
        let app = RecipeFinder::builder()
            .base_url("http://127.0.0.1:9")
            .store(Box::new(store))
            .build()
            .unwrap();

        assert!(app.state().is_favorite("1"));
        assert!(app.is_idle());
    }

    #[test]
    fn test_timeout_keeps_sub_second_precision() {
        let api = ApiConfig::default();

        let builder = RecipeFinder::builder().timeout(Duration::from_millis(500));
        assert_eq!(builder.request_timeout(&api), Duration::from_millis(500));

        let builder = RecipeFinder::builder();
        assert_eq!(builder.request_timeout(&api), Duration::from_secs(30));
    }

    #[test]
    fn test_build_with_corrupted_store_starts_empty() {
        let app = RecipeFinder::builder()
            .store(Box::new(MemoryStore::with_raw("not json")))
            .build()
            .unwrap();

        assert!(app.state().favorites.list().is_empty());
    }
}

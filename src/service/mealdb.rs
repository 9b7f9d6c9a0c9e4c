use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::adapter::{meal_detail_from_record, MealsEnvelope, RawMeal};
use super::{Endpoint, RecipeService};
use crate::config::ApiConfig;
use crate::error::ServiceError;
use crate::model::{MealDetail, MealSummary, SearchMode};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Client for TheMealDB JSON API
pub struct MealDbClient {
    client: Client,
    base_url: String,
    /// `None` when the client was built without a timeout
    timeout: Option<Duration>,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Self::with_timeout(config, Duration::from_secs(config.timeout))
    }

    /// Create a client from configuration with an explicit request timeout
    pub fn with_timeout(config: &ApiConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(MealDbClient {
            client,
            base_url: config.base_url.clone(),
            timeout: Some(timeout),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        MealDbClient {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_meals<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<Option<Vec<T>>, ServiceError> {
        let url = endpoint.url(&self.base_url);
        debug!("GET {}?{}={}", url, endpoint.param, endpoint.value);

        let body = self
            .client
            .get(&url)
            .query(&[(endpoint.param, endpoint.value.as_str())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!("{}", body);

        let envelope: MealsEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.meals)
    }
}

#[async_trait]
impl RecipeService for MealDbClient {
    fn service_name(&self) -> &str {
        "themealdb"
    }

    async fn search(
        &self,
        mode: SearchMode,
        query: &str,
    ) -> Result<Option<Vec<MealSummary>>, ServiceError> {
        self.fetch_meals(&Endpoint::for_search(mode, query)).await
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealDetail>, ServiceError> {
        let meals: Option<Vec<RawMeal>> = self.fetch_meals(&Endpoint::lookup_by_id(id)).await?;
        Ok(meals
            .and_then(|meals| meals.into_iter().next())
            .map(meal_detail_from_record))
    }
}

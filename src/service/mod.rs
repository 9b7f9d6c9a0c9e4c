mod adapter;
mod endpoints;
mod mealdb;

pub use adapter::{meal_detail_from_record, RawMeal, INGREDIENT_SLOTS};
pub use endpoints::Endpoint;
pub use mealdb::{MealDbClient, DEFAULT_BASE_URL};

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::model::{MealDetail, MealSummary, SearchMode};

/// Read-only access to a remote recipe catalogue.
///
/// `Ok(None)` means the service answered but had no match.
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Get the service name (e.g., "themealdb")
    fn service_name(&self) -> &str;

    /// Search meals by ingredient, name or category
    async fn search(
        &self,
        mode: SearchMode,
        query: &str,
    ) -> Result<Option<Vec<MealSummary>>, ServiceError>;

    /// Look up one meal by id
    async fn lookup(&self, id: &str) -> Result<Option<MealDetail>, ServiceError>;
}

use serde::{Deserialize, Serialize};

/// A meal as returned by the search endpoints.
///
/// Serialized with the service's field names, so stored favorites look like
/// the records the service hands out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail_url: String,
}

/// One ingredient line of a meal, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// A fully looked-up meal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

impl MealDetail {
    /// Summary record for this meal, as kept in the favorites list.
    pub fn summary(&self) -> MealSummary {
        MealSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }
}

/// Which search endpoint a query goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Ingredient,
    Name,
    Category,
}

impl SearchMode {
    /// Map a user-facing label to a mode.
    ///
    /// Unrecognized labels fall back to [`SearchMode::Ingredient`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "meal" | "name" => SearchMode::Name,
            "category" => SearchMode::Category,
            _ => SearchMode::Ingredient,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Ingredient => "ingredient",
            SearchMode::Name => "meal",
            SearchMode::Category => "category",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_labels() {
        assert_eq!(SearchMode::from_label("ingredient"), SearchMode::Ingredient);
        assert_eq!(SearchMode::from_label("meal"), SearchMode::Name);
        assert_eq!(SearchMode::from_label("Name"), SearchMode::Name);
        assert_eq!(SearchMode::from_label(" CATEGORY "), SearchMode::Category);
    }

    #[test]
    fn test_unknown_mode_defaults_to_ingredient() {
        assert_eq!(SearchMode::from_label("cuisine"), SearchMode::Ingredient);
        assert_eq!(SearchMode::from_label(""), SearchMode::Ingredient);
    }

    #[test]
    fn test_summary_uses_service_field_names() {
        let meal = MealSummary {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            thumbnail_url: "https://example.com/t.jpg".to_string(),
        };
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["idMeal"], "52772");
        assert_eq!(json["strMeal"], "Teriyaki Chicken Casserole");
        assert_eq!(json["strMealThumb"], "https://example.com/t.jpg");
    }

    #[test]
    fn test_summary_ignores_extra_fields() {
        let meal: MealSummary = serde_json::from_str(
            r#"{"idMeal":"1","strMeal":"Soup","strCategory":"Starter","strArea":null}"#,
        )
        .unwrap();
        assert_eq!(meal.id, "1");
        assert_eq!(meal.thumbnail_url, "");
    }
}

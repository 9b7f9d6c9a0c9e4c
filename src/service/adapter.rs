//! Decoding of the service's flat meal records.
//!
//! The lookup endpoint reports ingredients as twenty numbered field pairs
//! (`strIngredient1`/`strMeasure1` .. `strIngredient20`/`strMeasure20`).
//! That shape stops here: everything past this module sees [`MealDetail`].

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{Ingredient, MealDetail};

/// Number of indexed ingredient slots in a meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// Response wrapper shared by every endpoint.
///
/// `meals` is `null` (or missing) when nothing matched.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

/// A meal record exactly as the lookup endpoint returns it
#[derive(Debug, Deserialize)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    /// Every other field, including the ingredient slots
    #[serde(flatten)]
    pub slots: HashMap<String, Value>,
}

/// Convert a flat record into a [`MealDetail`].
///
/// Only slots with a non-blank ingredient are kept, in slot order. A missing
/// measure becomes an empty string.
pub fn meal_detail_from_record(record: RawMeal) -> MealDetail {
    let ingredients = (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let name = slot_text(&record.slots, &format!("strIngredient{slot}"))?;
            let measure =
                slot_text(&record.slots, &format!("strMeasure{slot}")).unwrap_or_default();
            Some(Ingredient { name, measure })
        })
        .collect();

    MealDetail {
        id: record.id,
        name: record.name,
        thumbnail_url: record.thumbnail_url.unwrap_or_default(),
        category: record.category.unwrap_or_default(),
        area: record.area.unwrap_or_default(),
        instructions: record.instructions.unwrap_or_default(),
        ingredients,
    }
}

fn slot_text(slots: &HashMap<String, Value>, key: &str) -> Option<String> {
    slots
        .get(key)?
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawMeal {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_keeps_only_filled_slots() {
        let detail = meal_detail_from_record(record(json!({
            "idMeal": "52874",
            "strMeal": "Beef Stew",
            "strIngredient1": "Beef",
            "strMeasure1": "1kg",
            "strIngredient2": "",
            "strMeasure2": "",
            "strIngredient3": null,
            "strMeasure3": null
        })));

        assert_eq!(detail.id, "52874");
        assert_eq!(detail.name, "Beef Stew");
        assert_eq!(
            detail.ingredients,
            vec![Ingredient {
                name: "Beef".to_string(),
                measure: "1kg".to_string()
            }]
        );
    }

    #[test]
    fn test_preserves_slot_order_across_gaps() {
        let detail = meal_detail_from_record(record(json!({
            "idMeal": "1",
            "strMeal": "Stew",
            "strIngredient1": "Onion",
            "strMeasure1": "1",
            "strIngredient2": " ",
            "strIngredient5": "Salt",
            "strMeasure5": null,
            "strIngredient20": "Pepper",
            "strMeasure20": " pinch "
        })));

        let names: Vec<&str> = detail.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Onion", "Salt", "Pepper"]);
        assert_eq!(detail.ingredients[1].measure, "");
        assert_eq!(detail.ingredients[2].measure, "pinch");
    }

    #[test]
    fn test_ignores_slots_past_twenty() {
        let detail = meal_detail_from_record(record(json!({
            "idMeal": "1",
            "strMeal": "Stew",
            "strIngredient21": "Ghost",
            "strMeasure21": "1"
        })));
        assert!(detail.ingredients.is_empty());
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let detail = meal_detail_from_record(record(json!({
            "idMeal": "1",
            "strMeal": "Stew",
            "strCategory": "Beef",
            "strArea": null,
            "dateModified": null
        })));
        assert_eq!(detail.category, "Beef");
        assert_eq!(detail.area, "");
        assert_eq!(detail.instructions, "");
        assert_eq!(detail.thumbnail_url, "");
    }
}

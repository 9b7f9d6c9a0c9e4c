use crate::model::SearchMode;

/// A GET request against the recipe service: a path relative to the base URL
/// and its single query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub param: &'static str,
    pub value: String,
}

impl Endpoint {
    pub fn search_by_ingredient(ingredient: &str) -> Self {
        Endpoint {
            path: "filter.php",
            param: "i",
            value: ingredient.to_string(),
        }
    }

    pub fn search_by_name(name: &str) -> Self {
        Endpoint {
            path: "search.php",
            param: "s",
            value: name.to_string(),
        }
    }

    pub fn search_by_category(category: &str) -> Self {
        Endpoint {
            path: "filter.php",
            param: "c",
            value: category.to_string(),
        }
    }

    pub fn lookup_by_id(id: &str) -> Self {
        Endpoint {
            path: "lookup.php",
            param: "i",
            value: id.to_string(),
        }
    }

    /// Pick the search constructor for a mode
    pub fn for_search(mode: SearchMode, query: &str) -> Self {
        match mode {
            SearchMode::Ingredient => Self::search_by_ingredient(query),
            SearchMode::Name => Self::search_by_name(query),
            SearchMode::Category => Self::search_by_category(query),
        }
    }

    /// Absolute URL (without the query string) under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path)
    }
}

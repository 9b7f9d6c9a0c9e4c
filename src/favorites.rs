use log::{debug, warn};

use crate::model::MealSummary;
use crate::store::FavoritesStore;

/// Toggle `meal` in `list` by id.
///
/// Removes the record with `meal.id` if present, otherwise appends `meal`.
pub fn toggle_favorite(list: &[MealSummary], meal: &MealSummary) -> Vec<MealSummary> {
    if list.iter().any(|m| m.id == meal.id) {
        list.iter().filter(|m| m.id != meal.id).cloned().collect()
    } else {
        let mut toggled = list.to_vec();
        toggled.push(meal.clone());
        toggled
    }
}

/// The favorites list together with the store it is written through to
pub struct Favorites {
    list: Vec<MealSummary>,
    store: Box<dyn FavoritesStore>,
}

impl Favorites {
    /// Load the list once from `store`
    pub fn load(store: Box<dyn FavoritesStore>) -> Self {
        let list = store.load();
        debug!("Loaded {} favorites", list.len());
        Favorites { list, store }
    }

    pub fn list(&self) -> &[MealSummary] {
        &self.list
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list.iter().any(|m| m.id == id)
    }

    /// Toggle `meal` and save the whole list. Returns whether it is now a favorite.
    pub fn toggle(&mut self, meal: &MealSummary) -> bool {
        self.list = toggle_favorite(&self.list, meal);
        if let Err(e) = self.store.save(&self.list) {
            warn!("Failed to save favorites: {}", e);
        }
        self.contains(&meal.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn meal(id: &str) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: format!("Meal {id}"),
            thumbnail_url: String::new(),
        }
    }

    fn sample_lists() -> Vec<Vec<MealSummary>> {
        vec![
            vec![],
            vec![meal("1")],
            vec![meal("1"), meal("2"), meal("3")],
            vec![meal("3"), meal("9"), meal("4"), meal("1")],
        ]
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let list = vec![meal("1"), meal("2")];
        let added = toggle_favorite(&list, &meal("3"));
        assert_eq!(added, vec![meal("1"), meal("2"), meal("3")]);

        let removed = toggle_favorite(&added, &meal("2"));
        assert_eq!(removed, vec![meal("1"), meal("3")]);
    }

    #[test]
    fn test_toggle_matches_by_id_only() {
        let list = vec![meal("1")];
        let renamed = MealSummary {
            name: "Different name".to_string(),
            ..meal("1")
        };
        assert!(toggle_favorite(&list, &renamed).is_empty());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        for list in sample_lists() {
            for id in ["1", "3", "42"] {
                let m = meal(id);
                let twice = toggle_favorite(&toggle_favorite(&list, &m), &m);
                // Removing then re-adding moves a present meal to the end
                if list.iter().any(|x| x.id == id) {
                    let mut expected: Vec<_> =
                        list.iter().filter(|x| x.id != id).cloned().collect();
                    expected.push(m.clone());
                    assert_eq!(twice, expected);
                } else {
                    assert_eq!(twice, list);
                }
            }
        }
    }

    #[test]
    fn test_toggle_never_duplicates_ids() {
        for list in sample_lists() {
            for id in ["1", "2", "9", "100"] {
                let toggled = toggle_favorite(&list, &meal(id));
                let ids: HashSet<_> = toggled.iter().map(|m| m.id.as_str()).collect();
                assert_eq!(ids.len(), toggled.len());
            }
        }
    }

    #[test]
    fn test_every_toggle_writes_through() {
        let store = Arc::new(MemoryStore::new());
        let mut favorites = Favorites::load(Box::new(store.clone()));
        assert!(favorites.list().is_empty());

        assert!(favorites.toggle(&meal("52874")));
        assert_eq!(store.load(), vec![meal("52874")]);

        assert!(!favorites.toggle(&meal("52874")));
        assert_eq!(store.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let store = MemoryStore::with_raw(
            r#"[{"idMeal":"1","strMeal":"Soup"},{"idMeal":"1","strMeal":"Soup"}]"#,
        );
        let mut favorites = Favorites::load(Box::new(store));
        assert_eq!(favorites.list().len(), 1);

        // One toggle removes the single remaining record
        assert!(!favorites.toggle(&meal("1")));
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn test_save_failure_keeps_in_memory_change() {
        let mut favorites = Favorites::load(Box::new(FailingStore));
        assert!(favorites.toggle(&meal("1")));
        assert!(favorites.contains("1"));
    }

    struct FailingStore;

    impl FavoritesStore for FailingStore {
        fn load(&self) -> Vec<MealSummary> {
            Vec::new()
        }

        fn save(&self, _favorites: &[MealSummary]) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }
}

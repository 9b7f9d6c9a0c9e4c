//! Persistence for the favorites list.
//!
//! A store maps one key to a JSON array of [`MealSummary`] records. Reading
//! never fails: a missing or unreadable value yields an empty list.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::error::StoreError;
use crate::model::MealSummary;

/// Load/save access to the persisted favorites list
pub trait FavoritesStore: Send {
    /// Stored list, or an empty list if none can be read
    fn load(&self) -> Vec<MealSummary>;

    /// Replace the stored list
    fn save(&self, favorites: &[MealSummary]) -> Result<(), StoreError>;
}

impl<S: FavoritesStore + Sync> FavoritesStore for Arc<S> {
    fn load(&self) -> Vec<MealSummary> {
        self.as_ref().load()
    }

    fn save(&self, favorites: &[MealSummary]) -> Result<(), StoreError> {
        self.as_ref().save(favorites)
    }
}

/// Parse a stored list, keeping the first record for each id
fn parse_favorites(raw: &str, source: &str) -> Vec<MealSummary> {
    match serde_json::from_str::<Vec<MealSummary>>(raw) {
        Ok(favorites) => {
            let mut seen = HashSet::new();
            favorites
                .into_iter()
                .filter(|meal| {
                    let first = seen.insert(meal.id.clone());
                    if !first {
                        debug!("Dropping duplicate favorite {} in {}", meal.id, source);
                    }
                    first
                })
                .collect()
        }
        Err(e) => {
            debug!("Ignoring unreadable favorites in {}: {}", source, e);
            Vec::new()
        }
    }
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        FileStore {
            dir: dir.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }
}

impl FavoritesStore for FileStore {
    fn load(&self) -> Vec<MealSummary> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(raw) => parse_favorites(&raw, &path.display().to_string()),
            Err(e) => {
                debug!("No favorites at {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&self, favorites: &[MealSummary]) -> Result<(), StoreError> {
        let json = serde_json::to_string(favorites)?;
        fs::create_dir_all(&self.dir)?;
        write_atomically(&self.path(), &json)?;
        Ok(())
    }
}

// Readers never observe a partially written list
fn write_atomically(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

/// In-memory store holding the raw serialized value
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored value, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        MemoryStore {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// Currently stored value
    pub fn raw(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Vec<MealSummary> {
        match self.raw() {
            Some(raw) => parse_favorites(&raw, "memory"),
            None => Vec::new(),
        }
    }

    fn save(&self, favorites: &[MealSummary]) -> Result<(), StoreError> {
        let json = serde_json::to_string(favorites)?;
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(json);
        Ok(())
    }
}

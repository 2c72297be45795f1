// ABOUTME: The persisted list of saved palettes, stored as one JSON array under a key
// ABOUTME: Unreadable lists load as empty; every mutation re-reads the store and persists the whole list

use crate::document::palette_from_value;
use crate::error::{PaletteError, Result};
use crate::store::KeyValueStore;
use prism_types::Palette;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug)]
pub struct PaletteLibrary {
    store: Arc<dyn KeyValueStore>,
    key: String,
    palettes: Vec<Palette>,
}

impl PaletteLibrary {
    /// Open the list stored under `key`
    pub fn open(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let mut library = Self {
            store,
            key: key.into(),
            palettes: Vec::new(),
        };
        library.reload();
        library
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|palette| palette.id == id)
    }

    /// Append a palette and persist the list.
    ///
    /// Starts from the stored list, so saves made through other handles on
    /// the same store are kept. On a storage failure the in-memory list is
    /// left untouched.
    pub fn append(&mut self, palette: Palette) -> Result<()> {
        let mut next = read_list(self.store.as_ref(), &self.key);
        next.push(palette);
        self.persist(&next)?;
        self.palettes = next;
        Ok(())
    }

    /// Remove every palette with `id`; `Ok(false)` when none matched
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let current = read_list(self.store.as_ref(), &self.key);
        let before = current.len();
        let next: Vec<Palette> = current
            .into_iter()
            .filter(|palette| palette.id != id)
            .collect();
        if next.len() == before {
            self.palettes = next;
            return Ok(false);
        }
        self.persist(&next)?;
        self.palettes = next;
        Ok(true)
    }

    /// Re-read the list from the store
    pub fn reload(&mut self) {
        self.palettes = read_list(self.store.as_ref(), &self.key);
        prism_logging::debug!(key = %self.key, loaded = self.palettes.len(), "Loaded saved palettes");
    }

    fn persist(&self, palettes: &[Palette]) -> Result<()> {
        let json = serde_json::to_string(palettes).map_err(PaletteError::Serialize)?;
        self.store.set(&self.key, &json)
    }
}

fn read_list(store: &dyn KeyValueStore, key: &str) -> Vec<Palette> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };

    let items = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            prism_logging::warn!(
                key = %key,
                kind = json_kind(&other),
                "Stored palette list is not an array, treating as empty"
            );
            return Vec::new();
        }
        Err(e) => {
            prism_logging::warn!(
                key = %key,
                error = %e,
                "Stored palette list is not valid JSON, treating as empty"
            );
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match palette_from_value(item) {
            Ok(palette) => Some(palette),
            Err(e) => {
                prism_logging::warn!(key = %key, index, error = %e, "Skipping unusable saved palette");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

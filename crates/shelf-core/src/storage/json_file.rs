//! JSON file backend.
//!
//! The file holds one top-level array of item records, pretty-printed UTF-8
//! with non-ASCII characters written literally. Every save rewrites the whole
//! file.

use std::path::{Path, PathBuf};

use crate::error::{InventoryError, Result};
use crate::fs::write_atomic;
use crate::item::Item;
use crate::storage::traits::StorageBackend;

/// Inventory persisted as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Item>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            InventoryError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let items: Vec<Item> = serde_json::from_str(&contents).map_err(|e| {
            InventoryError::Format(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(Some(items))
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        let contents = serde_json::to_string_pretty(items)?;
        write_atomic(&self.path, contents.as_bytes()).map_err(|e| {
            InventoryError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

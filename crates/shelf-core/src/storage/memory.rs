//! In-memory backend.

use crate::error::{InventoryError, Result};
use crate::item::Item;
use crate::storage::traits::StorageBackend;

/// Keeps the "persisted" collection in memory.
///
/// Useful for tests and for embedding the store without touching disk.
/// A failing instance rejects every save, which lets callers observe the
/// memory/file divergence that follows a failed write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Option<Vec<Item>>,
    fail_saves: bool,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `items` already persisted.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Some(items),
            ..Self::default()
        }
    }

    /// A backend whose saves always fail.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// The last successfully saved collection.
    pub fn persisted(&self) -> Option<&[Item]> {
        self.items.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Item>>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        if self.fail_saves {
            return Err(InventoryError::Io("memory backend rejected save".to_string()));
        }
        self.items = Some(items.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

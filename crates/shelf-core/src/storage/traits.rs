//! Storage backend trait definition.
//!
//! The `StorageBackend` trait is the seam between the in-memory
//! `InventoryStore` and wherever the item collection is persisted. The store
//! always hands the backend the complete collection; backends never diff.

use crate::error::Result;
use crate::item::Item;

/// Whole-collection persistence for inventory items.
pub trait StorageBackend {
    /// Load every persisted item, in persisted order.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet (for example
    /// the backing file does not exist).
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Io` if the data cannot be read and
    /// `InventoryError::Format` if it cannot be decoded.
    fn load(&self) -> Result<Option<Vec<Item>>>;

    /// Replace the persisted collection with `items`.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Io` if the write fails. No retry is attempted.
    fn save(&mut self, items: &[Item]) -> Result<()>;

    /// Human-readable location for messages and logs.
    fn location(&self) -> String;
}

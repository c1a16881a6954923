//! # Shelf Core
//!
//! Core library for Shelf - a single-user inventory tracker for a small shop.
//!
//! This crate holds the domain model, the file-backed store and the reports,
//! independent of the CLI. It never reads from stdin or prints; every
//! operation returns a structured result or an [`InventoryError`].
//!
//! ## Architecture
//!
//! - **item**: `Item`, `NewItem`, `ItemPatch`, `Timestamp`
//! - **store**: `InventoryStore` CRUD, search, stock and load/save
//! - **storage**: persistence backends (JSON file, memory)
//! - **report**: listing totals and the summary report
//! - **stock**: stock change records and the adjustment policy
//! - **export**: CSV export
//! - **parse**: operator input parsing

pub mod error;
pub mod export;
pub mod fs;
pub mod item;
pub mod parse;
pub mod report;
pub mod stock;
pub mod storage;
pub mod store;

pub use error::{InventoryError, Result};
pub use item::{Item, ItemPatch, NewItem, Timestamp};
pub use report::{InventoryListing, InventorySummary, ItemLine};
pub use stock::{StockAdjustment, StockChange};
pub use storage::{JsonFileStorage, MemoryStorage, StorageBackend};
pub use store::{AddOutcome, DuplicateDecision, InventoryStore, LoadOutcome, LoadWarning};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

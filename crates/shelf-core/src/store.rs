//! The inventory store: an ordered item collection bound to one backend.
//!
//! Every mutating operation changes the in-memory collection first and then
//! persists the whole collection. If the save fails the error is returned but
//! the in-memory change stays; memory and disk agree again after the next
//! successful save.

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{InventoryError, Result};
use crate::export::{default_export_name, write_csv};
use crate::item::{Item, ItemPatch, NewItem, Timestamp};
use crate::report::{InventoryListing, InventorySummary};
use crate::stock::{StockAdjustment, StockChange};
use crate::storage::{JsonFileStorage, StorageBackend};

/// Prefix of generated item ids.
pub const ID_PREFIX: &str = "ITM";

/// What happened when the store loaded its backend.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Nothing persisted yet; the store starts empty
    Missing,
    /// Items were loaded, possibly with findings about suspicious records
    Loaded {
        count: usize,
        warnings: Vec<LoadWarning>,
    },
    /// Loading failed; the store starts empty
    Failed(InventoryError),
}

impl LoadOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

/// A persisted record that was accepted as-is but looks wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadWarning {
    NegativeStock { id: String, stock: i64 },
    NegativePrice { id: String, price: f64 },
    /// A later record with the same id replaced an earlier one
    DuplicateId { id: String },
    DuplicateName {
        name: String,
        first_id: String,
        id: String,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::NegativeStock { id, stock } => {
                write!(f, "item {} has negative stock ({})", id, stock)
            }
            LoadWarning::NegativePrice { id, price } => {
                write!(f, "item {} has negative price ({})", id, price)
            }
            LoadWarning::DuplicateId { id } => {
                write!(f, "id {} appears more than once; the last record wins", id)
            }
            LoadWarning::DuplicateName { name, first_id, id } => {
                write!(f, "items {} and {} share the name \"{}\"", first_id, id, name)
            }
        }
    }
}

/// Caller's answer when an added name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateDecision {
    /// Add the new stock to the existing item
    Merge,
    /// Leave the inventory unchanged
    Reject,
}

/// Result of an add request.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// A new item was created and persisted
    Added(Item),
    /// The name existed and the new stock was merged into it
    Merged(StockChange),
    /// The name existed and nothing changed
    Duplicate(Item),
}

impl AddOutcome {
    /// The created item, failing with `DuplicateName` otherwise.
    pub fn require_added(self) -> Result<Item> {
        match self {
            AddOutcome::Added(item) => Ok(item),
            AddOutcome::Duplicate(existing) => Err(InventoryError::DuplicateName {
                name: existing.name,
                id: existing.id,
            }),
            AddOutcome::Merged(change) => Err(InventoryError::DuplicateName {
                name: change.name,
                id: change.id,
            }),
        }
    }
}

/// In-memory inventory persisted through a [`StorageBackend`].
pub struct InventoryStore<B = JsonFileStorage> {
    backend: B,
    items: Vec<Item>,
}

impl InventoryStore<JsonFileStorage> {
    /// Open the JSON file at `path`. Never fails; see [`LoadOutcome`].
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadOutcome) {
        Self::with_backend(JsonFileStorage::new(path))
    }

    pub fn path(&self) -> &Path {
        self.backend.path()
    }
}

impl<B: StorageBackend> InventoryStore<B> {
    /// Bind a store to `backend` and load whatever it holds.
    pub fn with_backend(backend: B) -> (Self, LoadOutcome) {
        let mut store = Self {
            backend,
            items: Vec::new(),
        };
        let outcome = store.reload();
        (store, outcome)
    }

    /// Replace the in-memory collection with the backend's contents.
    ///
    /// On any failure the store is left empty and the error is reported in
    /// the outcome rather than returned.
    pub fn reload(&mut self) -> LoadOutcome {
        self.items.clear();
        let location = self.backend.location();
        match self.backend.load() {
            Ok(None) => {
                info!(location = %location, "no inventory file, starting empty");
                LoadOutcome::Missing
            }
            Ok(Some(records)) => {
                let (items, warnings) = ingest(records);
                for warning in &warnings {
                    warn!(location = %location, "{}", warning);
                }
                self.items = items;
                info!(location = %location, count = self.items.len(), "inventory loaded");
                LoadOutcome::Loaded {
                    count: self.items.len(),
                    warnings,
                }
            }
            Err(err) => {
                warn!(location = %location, error = %err, "failed to load inventory, starting empty");
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Persist the whole collection.
    pub fn save(&mut self) -> Result<()> {
        match self.backend.save(&self.items) {
            Ok(()) => {
                debug!(location = %self.backend.location(), count = self.items.len(), "inventory saved");
                Ok(())
            }
            Err(err) => {
                warn!(location = %self.backend.location(), error = %err, "failed to save inventory");
                Err(err)
            }
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Items in store order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact id lookup.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add an item, reporting an existing name as [`AddOutcome::Duplicate`].
    pub fn add_item(&mut self, new: NewItem) -> Result<AddOutcome> {
        self.add_item_with(new, |_| DuplicateDecision::Reject)
    }

    /// Add an item, letting `decide` resolve a name clash.
    ///
    /// `decide` is called only when an item with the same name
    /// (case-insensitive) exists. Merging adds `new.stock` to the existing
    /// item's stock; the existing price is kept.
    pub fn add_item_with<F>(&mut self, new: NewItem, decide: F) -> Result<AddOutcome>
    where
        F: FnOnce(&Item) -> DuplicateDecision,
    {
        new.validate()?;

        if let Some(existing) = self.find_by_name(new.name.trim()).cloned() {
            return match decide(&existing) {
                DuplicateDecision::Merge => {
                    let merged = existing.stock.saturating_add(new.stock);
                    self.set_stock(&existing.id, merged).map(AddOutcome::Merged)
                }
                DuplicateDecision::Reject => {
                    debug!(id = %existing.id, name = %existing.name, "duplicate name rejected");
                    Ok(AddOutcome::Duplicate(existing))
                }
            };
        }

        let now = Timestamp::now();
        let item = Item::new(self.next_id(now), new.name.trim(), new.stock, new.price, now);
        self.items.push(item.clone());
        info!(id = %item.id, name = %item.name, "item added");
        self.save()?;
        Ok(AddOutcome::Added(item))
    }

    /// Items sorted by name with line values and totals.
    pub fn list_items(&self) -> InventoryListing {
        InventoryListing::from_items(&self.items)
    }

    /// Apply `patch` to the item `id` and refresh its `updated_at`.
    pub fn edit_item(&mut self, id: &str, patch: &ItemPatch) -> Result<Item> {
        patch.validate()?;
        let index = self.index_of(id)?;

        let item = &mut self.items[index];
        patch.apply(item);
        item.touch(Timestamp::now());
        let updated = item.clone();

        info!(id = %updated.id, "item edited");
        self.save()?;
        Ok(updated)
    }

    /// Remove the item `id` permanently.
    pub fn delete_item(&mut self, id: &str) -> Result<Item> {
        let index = self.index_of(id)?;
        let removed = self.items.remove(index);
        info!(id = %removed.id, name = %removed.name, "item deleted");
        self.save()?;
        Ok(removed)
    }

    /// Case-insensitive substring search over names and ids, in store order.
    pub fn search(&self, keyword: &str) -> Vec<&Item> {
        let needle = keyword.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches_lowercase(&needle))
            .collect()
    }

    /// First item whose name equals `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.has_name(name))
    }

    /// Store `value` as the item's stock, without clamping.
    ///
    /// Negative values are accepted here. Callers that decrement stock on an
    /// operator's behalf clamp first (see [`StockAdjustment`]).
    pub fn set_stock(&mut self, id: &str, value: i64) -> Result<StockChange> {
        let index = self.index_of(id)?;

        let item = &mut self.items[index];
        let change = StockChange {
            id: item.id.clone(),
            name: item.name.clone(),
            old: item.stock,
            new: value,
        };
        item.stock = value;
        item.touch(Timestamp::now());

        info!(id = %change.id, old = change.old, new = change.new, "stock updated");
        self.save()?;
        Ok(change)
    }

    /// Resolve `adjustment` against the current stock and store the result.
    pub fn adjust_stock(&mut self, id: &str, adjustment: StockAdjustment) -> Result<StockChange> {
        let current = self
            .get(id)
            .map(|item| item.stock)
            .ok_or_else(|| InventoryError::not_found(id))?;
        self.set_stock(id, adjustment.apply(current))
    }

    /// Write every item to a CSV file and return its path.
    ///
    /// Without `path` a timestamped name in the current directory is used.
    /// A failure part-way through can leave a partial file behind.
    pub fn export_csv(&self, path: Option<&Path>) -> Result<PathBuf> {
        let target = match path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(default_export_name(Timestamp::now())),
        };
        let file = File::create(&target).map_err(|e| {
            InventoryError::Io(format!("Failed to create {}: {}", target.display(), e))
        })?;
        write_csv(BufWriter::new(file), &self.items).map_err(|e| {
            InventoryError::Io(format!("Failed to write {}: {}", target.display(), e))
        })?;
        info!(path = %target.display(), count = self.items.len(), "inventory exported");
        Ok(target)
    }

    /// Aggregate report, or `None` for an empty inventory.
    pub fn summary(&self) -> Option<InventorySummary> {
        InventorySummary::compute(&self.items)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| InventoryError::not_found(id))
    }

    /// `ITM<YYYYmmddHHMMSS>`, suffixed `-2`, `-3`, ... while taken.
    fn next_id(&self, now: Timestamp) -> String {
        let base = format!("{}{}", ID_PREFIX, now.format("%Y%m%d%H%M%S"));
        if self.get(&base).is_none() {
            return base;
        }
        (2u64..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or(base)
    }
}

/// Key loaded records by id and collect findings, without rejecting anything.
fn ingest(records: Vec<Item>) -> (Vec<Item>, Vec<LoadWarning>) {
    let mut items: Vec<Item> = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for record in records {
        match items.iter().position(|item| item.id == record.id) {
            Some(index) => {
                warnings.push(LoadWarning::DuplicateId {
                    id: record.id.clone(),
                });
                items[index] = record;
            }
            None => items.push(record),
        }
    }

    for (index, item) in items.iter().enumerate() {
        if item.stock < 0 {
            warnings.push(LoadWarning::NegativeStock {
                id: item.id.clone(),
                stock: item.stock,
            });
        }
        if item.price < 0.0 {
            warnings.push(LoadWarning::NegativePrice {
                id: item.id.clone(),
                price: item.price,
            });
        }
        if let Some(first) = items[..index].iter().find(|other| other.has_name(&item.name)) {
            warnings.push(LoadWarning::DuplicateName {
                name: item.name.clone(),
                first_id: first.id.clone(),
                id: item.id.clone(),
            });
        }
    }

    (items, warnings)
}

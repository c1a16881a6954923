//! Read-only aggregates over the item collection.

use serde::Serialize;

use crate::item::Item;

/// One listing row: an item with its line value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemLine {
    #[serde(flatten)]
    pub item: Item,
    pub line_value: f64,
}

impl ItemLine {
    pub fn new(item: &Item) -> Self {
        Self {
            item: item.clone(),
            line_value: item.line_value(),
        }
    }
}

/// Items ordered by name with running totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryListing {
    pub rows: Vec<ItemLine>,
    pub total_stock: i64,
    pub total_value: f64,
}

impl InventoryListing {
    /// Build a listing from items in store order; rows end up sorted by name.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut rows: Vec<ItemLine> = items.into_iter().map(ItemLine::new).collect();
        rows.sort_by(|a, b| a.item.name.cmp(&b.item.name));

        let mut total_stock = 0i64;
        let mut total_value = 0.0;
        for row in &rows {
            total_stock = total_stock.saturating_add(row.item.stock);
            total_value += row.line_value;
        }

        Self {
            rows,
            total_stock,
            total_value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Aggregate figures for a non-empty inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub item_count: usize,
    pub total_stock: i64,
    pub total_value: f64,
    pub average_value: f64,
    pub lowest_stock: Item,
    pub highest_value: ItemLine,
}

impl InventorySummary {
    /// Compute the summary in store order, or `None` when there are no items.
    ///
    /// Ties for lowest stock and highest line value go to the first item
    /// encountered.
    pub fn compute(items: &[Item]) -> Option<Self> {
        let first = items.first()?;

        let mut total_stock = 0i64;
        let mut total_value = 0.0;
        let mut lowest = first;
        let mut highest = first;
        for item in items {
            total_stock = total_stock.saturating_add(item.stock);
            total_value += item.line_value();
            if item.stock < lowest.stock {
                lowest = item;
            }
            if item.line_value() > highest.line_value() {
                highest = item;
            }
        }

        Some(Self {
            item_count: items.len(),
            total_stock,
            total_value,
            average_value: total_value / items.len() as f64,
            lowest_stock: lowest.clone(),
            highest_value: ItemLine::new(highest),
        })
    }
}

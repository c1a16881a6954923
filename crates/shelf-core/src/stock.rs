//! Stock change records and the stock adjustment policy.
//!
//! `InventoryStore::set_stock` stores whatever value it is given, negatives
//! included. Floor handling lives here: `StockAdjustment::Decrease` clamps at
//! zero before the value ever reaches the store.

use serde::Serialize;

/// Result of a stock write: which item changed and from what to what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockChange {
    pub id: String,
    pub name: String,
    pub old: i64,
    pub new: i64,
}

impl StockChange {
    /// Stock reached zero or below. `set_stock` can store negatives, so a
    /// negative count also reads as depleted.
    pub fn is_depleted(&self) -> bool {
        self.new <= 0
    }
}

/// How an operator wants to change an item's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    /// Replace the stock with an absolute value
    Set(i64),
    /// Add units
    Increase(i64),
    /// Remove units, never going below zero
    Decrease(i64),
}

impl StockAdjustment {
    /// Target stock for an item currently holding `current` units.
    pub fn apply(self, current: i64) -> i64 {
        match self {
            StockAdjustment::Set(value) => value,
            StockAdjustment::Increase(amount) => current.saturating_add(amount),
            StockAdjustment::Decrease(amount) => current.saturating_sub(amount).max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_not_clamped() {
        assert_eq!(StockAdjustment::Set(-3).apply(10), -3);
    }

    #[test]
    fn test_increase() {
        assert_eq!(StockAdjustment::Increase(5).apply(10), 15);
    }

    #[test]
    fn test_decrease_clamps_to_zero() {
        assert_eq!(StockAdjustment::Decrease(4).apply(10), 6);
        assert_eq!(StockAdjustment::Decrease(25).apply(10), 0);
    }

    #[test]
    fn test_depleted() {
        let change = StockChange {
            id: "A".to_string(),
            name: "Teh".to_string(),
            old: 3,
            new: 0,
        };
        assert!(change.is_depleted());
    }

    #[test]
    fn test_negative_stock_counts_as_depleted() {
        let change = StockChange {
            id: "A".to_string(),
            name: "Teh".to_string(),
            old: 3,
            new: -2,
        };
        assert!(change.is_depleted());
        let restocked = StockChange { new: 1, ..change };
        assert!(!restocked.is_depleted());
    }
}

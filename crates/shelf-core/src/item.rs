//! Inventory item model.
//!
//! An [`Item`] is the persisted record. [`NewItem`] and [`ItemPatch`] are the
//! inputs accepted by the store for creating and editing items.

use std::fmt;

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{InventoryError, Result};

/// Persisted timestamp layout (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock timestamp with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Current local time, truncated to whole seconds.
    pub fn now() -> Self {
        Self::from(Local::now().naive_local())
    }

    /// Parse a `YYYY-MM-DD HH:MM:SS` string.
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|e| InventoryError::Format(format!("Invalid timestamp \"{}\": {}", value, e)))
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Render with an arbitrary chrono format string.
    pub fn format(&self, fmt: &str) -> String {
        self.0.format(fmt).to_string()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.trunc_subsecs(0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    /// Opaque unique identifier
    pub id: String,

    /// Display name, unique under case-insensitive comparison at creation
    pub name: String,

    /// Units on hand
    pub stock: i64,

    /// Unit price
    pub price: f64,

    /// When the item was first created
    pub created_at: Timestamp,

    /// Last change to name, stock or price
    pub updated_at: Timestamp,
}

/// Wire shape accepted when reading items; timestamps may be absent.
#[derive(Deserialize)]
struct ItemRecord {
    id: String,
    name: String,
    stock: i64,
    price: f64,
    #[serde(default)]
    created_at: Option<Timestamp>,
    #[serde(default)]
    updated_at: Option<Timestamp>,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let created_at = record.created_at.unwrap_or_else(Timestamp::now);
        Self {
            id: record.id,
            name: record.name,
            stock: record.stock,
            price: record.price,
            created_at,
            updated_at: record.updated_at.unwrap_or(created_at),
        }
    }
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stock: i64,
        price: f64,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stock,
            price,
            created_at,
            updated_at: created_at,
        }
    }

    /// Stock multiplied by unit price.
    pub fn line_value(&self) -> f64 {
        self.stock as f64 * self.price
    }

    /// Case-insensitive exact name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring match against name and id.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }

    pub(crate) fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }
}

/// Input for creating an item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub stock: i64,
    pub price: f64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, stock: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            stock,
            price,
        }
    }

    /// Reject empty names and negative quantities.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_stock(self.stock)?;
        validate_price(self.price)
    }
}

/// Partial update for an existing item. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub stock: Option<i64>,
    pub price: Option<f64>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.stock.is_none() && self.price.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name {
            validate_name(name)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }

    pub(crate) fn apply(&self, item: &mut Item) {
        if let Some(ref name) = self.name {
            item.name = name.trim().to_string();
        }
        if let Some(stock) = self.stock {
            item.stock = stock;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InventoryError::invalid_input("Item name cannot be empty"));
    }
    Ok(())
}

fn validate_stock(stock: i64) -> Result<()> {
    if stock < 0 {
        return Err(InventoryError::invalid_input(format!(
            "Stock cannot be negative: {}",
            stock
        )));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(InventoryError::invalid_input(format!(
            "Price must be a non-negative number: {}",
            price
        )));
    }
    Ok(())
}

//! Parsing of operator-typed numbers.
//!
//! Both the interactive menu and the subcommands read stock and price as
//! free text; failures surface as `InventoryError::InvalidInput`.

use crate::error::{InventoryError, Result};

/// Parse an integer stock quantity.
pub fn parse_stock(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    trimmed.parse::<i64>().map_err(|_| {
        InventoryError::invalid_input(format!("Stock must be a whole number: \"{}\"", trimmed))
    })
}

/// Parse a unit price.
pub fn parse_price(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    let parsed = trimmed.parse::<f64>().map_err(|_| {
        InventoryError::invalid_input(format!("Price must be a number: \"{}\"", trimmed))
    })?;
    if !parsed.is_finite() {
        return Err(InventoryError::invalid_input(format!(
            "Price must be a finite number: \"{}\"",
            trimmed
        )));
    }
    Ok(parsed)
}

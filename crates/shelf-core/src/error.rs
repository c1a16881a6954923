//! Error types for Shelf core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! exit codes and user-facing hints.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Core error type for inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// No item with the given id
    #[error("Item not found: {0}")]
    NotFound(String),

    /// An item with the same name (case-insensitive) already exists
    #[error("Item \"{name}\" already exists with ID {id}")]
    DuplicateName { name: String, id: String },

    /// Invalid user input (unparseable or out-of-range numbers, empty names)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Persisted data could not be encoded or decoded
    #[error("Format error: {0}")]
    Format(String),
}

impl InventoryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        InventoryError::NotFound(id.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        InventoryError::InvalidInput(message.into())
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Format(err.to_string())
    }
}

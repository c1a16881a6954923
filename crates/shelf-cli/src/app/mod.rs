//! Application-level utilities for the Shelf CLI.
//!
//! This module provides:
//! - Path resolution for config and inventory files
//! - The per-invocation application context

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{missing_config_message, resolve_config_path, resolve_inventory_path};

//! Path resolution for config and inventory files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_inventory_path, ShelfConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking SHELF_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the inventory file path.
///
/// Order: `--file` / `SHELF_FILE`, then the config file, then the XDG data
/// directory default.
pub fn resolve_inventory_path(cli: &Cli, config: Option<&ShelfConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.file.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.inventory.path));
    }
    default_inventory_path()
}

/// Error message when an explicitly requested config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("No config found at {}", config_path.display())
}

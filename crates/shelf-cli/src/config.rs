use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR, DEFAULT_DATA_FILE};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ShelfConfig {
    pub inventory: InventorySection,
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct InventorySection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ExportSection {
    pub dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct UiSection {
    pub currency: Option<String>,
}

impl ShelfConfig {
    pub fn new(
        inventory_path: PathBuf,
        export_dir: Option<PathBuf>,
        currency: Option<String>,
    ) -> Self {
        Self {
            inventory: InventorySection {
                path: inventory_path.to_string_lossy().to_string(),
            },
            export: ExportSection {
                dir: export_dir.map(|dir| dir.to_string_lossy().to_string()),
            },
            ui: UiSection { currency },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_inventory_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DEFAULT_DATA_FILE))
}

pub fn read_config(path: &Path) -> anyhow::Result<ShelfConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &ShelfConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

/// `$<var>/shelf`, or `~/<fallback>/shelf` when the variable is unset or blank.
fn xdg_dir(var: &str, fallback: &[&str]) -> anyhow::Result<PathBuf> {
    let base = match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => fallback.iter().fold(home_dir()?, |dir, part| dir.join(part)),
    };
    Ok(base.join(APP_DIR))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))
}

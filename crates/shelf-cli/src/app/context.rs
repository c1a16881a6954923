//! Application context for the Shelf CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use tracing::debug;

use shelf_core::export::default_export_name;
use shelf_core::{InventoryStore, LoadOutcome, Timestamp};

use crate::cli::Cli;
use crate::config::{read_config, ShelfConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;
use crate::ui::{badge, Badge, OutputFormat, Terminal, UiContext, UiOptions};

use super::resolver::{missing_config_message, resolve_config_path, resolve_inventory_path};

/// Application context that bundles CLI args with the config file.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<ShelfConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily.
    ///
    /// A missing default config is not an error; a missing file named by
    /// `SHELF_CONFIG` is.
    pub fn config(&self) -> anyhow::Result<Option<&ShelfConfig>> {
        self.config
            .get_or_try_init(load_config)
            .map(|config| config.as_ref())
    }

    /// Currency prefix from the config, empty when unset.
    pub fn currency(&self) -> String {
        self.config()
            .ok()
            .flatten()
            .and_then(|config| config.ui.currency.clone())
            .unwrap_or_default()
    }

    /// Build a UI context for the current command.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        let options = UiOptions {
            json,
            format,
            no_color: self.cli.no_color,
            ascii: self.cli.ascii,
            currency: self.currency(),
        };
        UiContext::new(&Terminal::detect(), options)
    }

    /// Resolve the inventory data file path.
    pub fn inventory_path(&self) -> anyhow::Result<PathBuf> {
        if self.cli.file.is_some() {
            return resolve_inventory_path(self.cli, None);
        }
        resolve_inventory_path(self.cli, self.config()?)
    }

    /// Open the inventory for a one-shot command.
    ///
    /// Load warnings are printed to stderr. A file that cannot be read or
    /// parsed is an error here, so nothing overwrites it.
    pub fn open_store(&self, ui: &UiContext) -> anyhow::Result<InventoryStore> {
        let (store, outcome) = self.load_store(ui)?;
        match outcome {
            LoadOutcome::Failed(err) => Err(err.into()),
            _ => Ok(store),
        }
    }

    /// Open the inventory, reporting a load failure instead of returning it.
    ///
    /// The store starts empty when loading fails.
    pub fn open_store_lenient(&self, ui: &UiContext) -> anyhow::Result<InventoryStore> {
        let (store, outcome) = self.load_store(ui)?;
        if let LoadOutcome::Failed(err) = outcome {
            eprintln!("{}", badge(ui, Badge::Err, &err.to_string()));
            eprintln!(
                "{}",
                badge(ui, Badge::Warn, "Starting with an empty inventory.")
            );
        }
        Ok(store)
    }

    /// Destination for a CSV export.
    ///
    /// An explicit path wins. Otherwise a timestamped file in the configured
    /// export directory, or `None` to let the store pick the current
    /// directory.
    pub fn export_target(&self, explicit: Option<&str>) -> anyhow::Result<Option<PathBuf>> {
        if let Some(path) = explicit.filter(|p| !p.trim().is_empty()) {
            return Ok(Some(PathBuf::from(path.trim())));
        }
        let dir = self
            .config()?
            .and_then(|config| config.export.dir.as_deref())
            .map(Path::new);
        match dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|e| {
                    anyhow::anyhow!("Failed to create export directory {}: {}", dir.display(), e)
                })?;
                Ok(Some(dir.join(default_export_name(Timestamp::now()))))
            }
            None => Ok(None),
        }
    }

    fn load_store(&self, ui: &UiContext) -> anyhow::Result<(InventoryStore, LoadOutcome)> {
        let path = self.inventory_path()?;
        debug!(path = %path.display(), "opening inventory");
        let (store, outcome) = InventoryStore::open(&path);
        if let LoadOutcome::Loaded { warnings, .. } = &outcome {
            if !self.quiet() {
                for warning in warnings {
                    eprintln!("{}", badge(ui, Badge::Warn, &warning.to_string()));
                }
            }
        }
        Ok((store, outcome))
    }
}

fn load_config() -> anyhow::Result<Option<ShelfConfig>> {
    let path = resolve_config_path()?;
    if path.exists() {
        debug!(path = %path.display(), "reading config");
        return read_config(&path).map(Some);
    }

    let explicit = std::env::var(CONFIG_ENV)
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false);
    if explicit {
        return Err(CliError::not_found(
            missing_config_message(&path),
            format!("Hint: Run `shelf init` or unset {}.", CONFIG_ENV),
        )
        .into());
    }
    Ok(None)
}

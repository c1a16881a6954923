use std::path::{Path, PathBuf};

use crate::app::{resolve_config_path, resolve_inventory_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, ShelfConfig};
use crate::errors::CliError;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Re-run with --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let inventory_path = match args.path.as_deref() {
        Some(path) => absolute(Path::new(path))?,
        None => absolute(&resolve_inventory_path(ctx.cli(), None)?)?,
    };
    let export_dir = args
        .export_dir
        .as_deref()
        .map(|dir| absolute(Path::new(dir)))
        .transpose()?;
    let currency = args
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from);

    let config = ShelfConfig::new(inventory_path.clone(), export_dir, currency);
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        print(
            &ui,
            &receipt(
                &ui,
                "Config written",
                &[
                    ("Config", config_path.display().to_string()),
                    ("Inventory", inventory_path.display().to_string()),
                ],
            ),
        );
        print(
            &ui,
            &hint(&ui, "shelf add \"Item name\" --stock 10 --price 5000"),
        );
    }
    Ok(())
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("Failed to resolve current directory: {}", e))?;
    Ok(cwd.join(path))
}

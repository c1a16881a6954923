use std::path::Path;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::output::print_exported;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let store = ctx.open_store(&ui)?;

    let target = ctx.export_target(args.path.as_deref())?;
    let path = store.export_csv(target.as_deref())?;
    if !ctx.quiet() {
        print_exported(&ui, &path, store.len());
    }
    Ok(())
}

/// Append ".csv" to a typed file name that has no extension.
pub fn with_csv_extension(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() || Path::new(trimmed).extension().is_some() {
        trimmed.to_string()
    } else {
        format!("{}.csv", trimmed)
    }
}

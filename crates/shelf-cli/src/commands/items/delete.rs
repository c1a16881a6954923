use shelf_core::InventoryError;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::{confirm, is_interactive};
use crate::output::print_deleted;
use crate::ui::print;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let id = args.id.trim();
    let mut store = ctx.open_store(&ui)?;

    let item = store
        .get(id)
        .cloned()
        .ok_or_else(|| InventoryError::not_found(id))?;

    if !args.yes {
        if !is_interactive(false) {
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation\nHint: Pass --yes to delete non-interactively.",
            )
            .into());
        }
        let question = format!("Delete \"{}\" ({}, stock {})?", item.name, item.id, item.stock);
        if !confirm(&question, false)? {
            print(&ui, "Cancelled.");
            return Ok(());
        }
    }

    let removed = store.delete_item(id)?;
    if !ctx.quiet() {
        print_deleted(&ui, &removed);
    }
    Ok(())
}

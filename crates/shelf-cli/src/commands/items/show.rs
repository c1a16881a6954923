use shelf_core::{InventoryError, ItemLine};

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{print_item, print_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None);
    let store = ctx.open_store(&ui)?;

    let item = store
        .get(args.id.trim())
        .ok_or_else(|| InventoryError::not_found(args.id.trim()))?;
    if ui.mode.is_json() {
        return print_json(&ItemLine::new(item));
    }
    print_item(&ui, item);
    Ok(())
}

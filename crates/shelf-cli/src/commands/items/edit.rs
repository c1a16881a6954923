use shelf_core::parse::{parse_price, parse_stock};
use shelf_core::{InventoryError, Item, ItemPatch};

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{is_interactive, parse_optional_price, parse_optional_stock, prompt_text};
use crate::output::print_edited;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let id = args.id.trim();

    let mut patch = ItemPatch {
        name: args.name.clone(),
        stock: parse_optional_stock(args.stock.as_deref())?,
        price: parse_optional_price(args.price.as_deref())?,
    };

    let mut store = ctx.open_store(&ui)?;
    let current = store
        .get(id)
        .cloned()
        .ok_or_else(|| InventoryError::not_found(id))?;

    if patch.is_empty() {
        if !is_interactive(args.no_input) {
            return Err(CliError::invalid_input(
                "Nothing to change\nHint: Pass --name, --stock or --price.",
            )
            .into());
        }
        patch = prompt_patch(&current)?;
    }

    let updated = store.edit_item(id, &patch)?;
    if !ctx.quiet() {
        print_edited(&ui, &updated);
    }
    Ok(())
}

/// Prompt for each field, keeping the current value on a blank answer.
pub fn prompt_patch(current: &Item) -> anyhow::Result<ItemPatch> {
    let mut patch = ItemPatch::new();

    let name = prompt_text(&format!("Name [{}]", current.name))?;
    if !name.is_empty() {
        patch = patch.name(name);
    }
    let stock = prompt_text(&format!("Stock [{}]", current.stock))?;
    if !stock.is_empty() {
        patch = patch.stock(parse_stock(&stock)?);
    }
    let price = prompt_text(&format!("Price [{}]", current.price))?;
    if !price.is_empty() {
        patch = patch.price(parse_price(&price)?);
    }
    Ok(patch)
}

//! Interactive menu, the default when no command is given.
//!
//! Each action runs against one store kept open for the whole session.
//! Errors are printed and the menu is shown again.

use shelf_core::parse::{parse_price, parse_stock};
use shelf_core::{InventoryError, InventoryStore, NewItem, StockAdjustment};

use crate::app::AppContext;
use crate::errors::{message_and_hint, CliError};
use crate::helpers::{
    confirm, is_interactive, parse_amount, prompt_required, prompt_select, prompt_text,
};
use crate::output::{
    print_add_outcome, print_deleted, print_edited, print_exported, print_listing,
    print_search_results, print_stock_change, print_summary,
};
use crate::ui::{blank_line, header, kv, print, print_error, UiContext};

use super::items::{merge_decision, prompt_patch, require_keyword};
use super::reports::with_csv_extension;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    List,
    Edit,
    Delete,
    Search,
    Stock,
    Export,
    Summary,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 9] = [
        MenuAction::Add,
        MenuAction::List,
        MenuAction::Edit,
        MenuAction::Delete,
        MenuAction::Search,
        MenuAction::Stock,
        MenuAction::Export,
        MenuAction::Summary,
        MenuAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::Add => "1. Add item",
            MenuAction::List => "2. List items",
            MenuAction::Edit => "3. Edit item",
            MenuAction::Delete => "4. Delete item",
            MenuAction::Search => "5. Search items",
            MenuAction::Stock => "6. Update stock",
            MenuAction::Export => "7. Export to CSV",
            MenuAction::Summary => "8. Summary",
            MenuAction::Quit => "0. Quit",
        }
    }
}

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    if !is_interactive(false) {
        return Err(CliError::invalid_input(
            "The interactive menu needs a terminal\nHint: Run `shelf --help` to see the commands.",
        )
        .into());
    }

    let ui = ctx.ui_context(false, None);
    let mut store = ctx.open_store_lenient(&ui)?;
    let location = store.path().display().to_string();
    print(&ui, &header(&ui, "menu", None, Some(&location)));

    let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();
    loop {
        blank_line(&ui);
        let choice = prompt_select("Choose an action", &labels, 0)?;
        let action = MenuAction::ALL
            .get(choice)
            .copied()
            .unwrap_or(MenuAction::Quit);
        if action == MenuAction::Quit {
            print(&ui, "Goodbye.");
            return Ok(());
        }

        if let Err(err) = run_action(ctx, &ui, &mut store, action) {
            let (message, hint) = message_and_hint(&err);
            print_error(&ui, &message, hint.as_deref());
        }
    }
}

fn run_action(
    ctx: &AppContext,
    ui: &UiContext,
    store: &mut InventoryStore,
    action: MenuAction,
) -> anyhow::Result<()> {
    match action {
        MenuAction::Add => add(ui, store),
        MenuAction::List => {
            let details = confirm("Show created/updated timestamps?", true)?;
            print_listing(ui, &store.list_items(), details, store.path());
            Ok(())
        }
        MenuAction::Edit => edit(ui, store),
        MenuAction::Delete => delete(ui, store),
        MenuAction::Search => {
            let keyword = prompt_required("Keyword")?;
            let keyword = require_keyword(&keyword)?;
            print_search_results(ui, keyword, &store.search(keyword));
            Ok(())
        }
        MenuAction::Stock => stock(ui, store),
        MenuAction::Export => {
            let name = with_csv_extension(&prompt_text("File name (blank for default)")?);
            let target = ctx.export_target(Some(&name))?;
            let path = store.export_csv(target.as_deref())?;
            print_exported(ui, &path, store.len());
            Ok(())
        }
        MenuAction::Summary => {
            print_summary(ui, store.summary().as_ref());
            Ok(())
        }
        MenuAction::Quit => Ok(()),
    }
}

fn add(ui: &UiContext, store: &mut InventoryStore) -> anyhow::Result<()> {
    let name = prompt_required("Item name")?;
    let stock = parse_stock(&prompt_required("Stock")?)?;
    let price = parse_price(&prompt_required("Unit price")?)?;

    let mut prompt_error = None;
    let outcome = store.add_item_with(NewItem::new(name, stock, price), |existing| {
        merge_decision(existing, stock, &mut prompt_error)
    })?;
    if let Some(err) = prompt_error {
        return Err(err);
    }
    print_add_outcome(ui, &outcome);
    Ok(())
}

/// Show the item table and ask which item to work on.
///
/// Returns `None` when the inventory is empty.
fn pick_item_id(ui: &UiContext, store: &InventoryStore) -> anyhow::Result<Option<String>> {
    print_listing(ui, &store.list_items(), false, store.path());
    if store.is_empty() {
        return Ok(None);
    }
    let id = prompt_required("Item ID")?;
    if store.get(&id).is_none() {
        return Err(InventoryError::not_found(id).into());
    }
    Ok(Some(id))
}

fn edit(ui: &UiContext, store: &mut InventoryStore) -> anyhow::Result<()> {
    let Some(id) = pick_item_id(ui, store)? else {
        return Ok(());
    };
    let current = store
        .get(&id)
        .cloned()
        .ok_or_else(|| InventoryError::not_found(&id))?;

    let patch = prompt_patch(&current)?;
    let updated = store.edit_item(&id, &patch)?;
    print_edited(ui, &updated);
    Ok(())
}

fn delete(ui: &UiContext, store: &mut InventoryStore) -> anyhow::Result<()> {
    let Some(id) = pick_item_id(ui, store)? else {
        return Ok(());
    };
    let question = match store.get(&id) {
        Some(item) => format!("Delete \"{}\" (stock {})?", item.name, item.stock),
        None => return Err(InventoryError::not_found(id).into()),
    };
    if !confirm(&question, false)? {
        print(ui, "Cancelled.");
        return Ok(());
    }

    let removed = store.delete_item(&id)?;
    print_deleted(ui, &removed);
    Ok(())
}

fn stock(ui: &UiContext, store: &mut InventoryStore) -> anyhow::Result<()> {
    let Some(id) = pick_item_id(ui, store)? else {
        return Ok(());
    };
    if let Some(item) = store.get(&id) {
        print(ui, &kv(ui, "Current stock", &item.stock.to_string()));
    }

    let modes = ["Set to a value", "Add units", "Remove units"];
    let adjustment = match prompt_select("Adjustment", &modes, 0)? {
        0 => StockAdjustment::Set(parse_stock(&prompt_required("New stock")?)?),
        1 => StockAdjustment::Increase(parse_amount(&prompt_required("Units to add")?)?),
        _ => StockAdjustment::Decrease(parse_amount(&prompt_required("Units to remove")?)?),
    };

    let change = store.adjust_stock(&id, adjustment)?;
    print_stock_change(ui, &change);
    Ok(())
}

//! Text and table output formatting.

use std::path::Path;

use shelf_core::{AddOutcome, InventoryListing, InventorySummary, Item, StockChange};

use crate::ui::format::{format_quantity, single_line};
use crate::ui::{
    badge, blank_line, divider, format_money, header, kv, print, receipt, table, truncate, Badge,
    Column, UiContext,
};

const NAME_WIDTH: usize = 40;

/// Render an amount: grouped with the currency prefix when pretty, raw otherwise.
fn money(ui: &UiContext, value: f64) -> String {
    if ui.mode.is_pretty() {
        format_money(value, &ui.currency)
    } else {
        value.to_string()
    }
}

fn quantity(ui: &UiContext, value: i64) -> String {
    if ui.mode.is_pretty() {
        format_quantity(value)
    } else {
        value.to_string()
    }
}

fn display_name(ui: &UiContext, name: &str) -> String {
    let name = single_line(name);
    if ui.mode.is_pretty() {
        truncate(&name, NAME_WIDTH)
    } else {
        name
    }
}

/// Print all items with their line values and the totals.
pub fn print_listing(ui: &UiContext, listing: &InventoryListing, details: bool, path: &Path) {
    let count = format!("{} items", listing.rows.len());
    let location = path.display().to_string();
    print(ui, &header(ui, "list", Some(&count), Some(&location)));

    if listing.is_empty() {
        print(ui, "Inventory is empty.");
        return;
    }

    let mut columns = vec![
        Column::new("ID"),
        Column::new("Name"),
        Column::numeric("Stock"),
        Column::numeric("Price"),
        Column::numeric("Value"),
    ];
    if details {
        columns.push(Column::new("Created"));
        columns.push(Column::new("Updated"));
    }

    let rows: Vec<Vec<String>> = listing
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.item.id.clone(),
                display_name(ui, &row.item.name),
                quantity(ui, row.item.stock),
                money(ui, row.item.price),
                money(ui, row.line_value),
            ];
            if details {
                cells.push(row.item.created_at.to_string());
                cells.push(row.item.updated_at.to_string());
            }
            cells
        })
        .collect();

    print(ui, &table(ui, &columns, &rows));
    if ui.mode.is_pretty() {
        print(ui, &divider(ui));
    }
    print(ui, &kv(ui, "Total stock", &quantity(ui, listing.total_stock)));
    print(ui, &kv(ui, "Total value", &money(ui, listing.total_value)));
}

/// Print every field of one item.
pub fn print_item(ui: &UiContext, item: &Item) {
    print(ui, &header(ui, "show", Some(&item.id), None));
    print(ui, &kv(ui, "ID", &item.id));
    print(ui, &kv(ui, "Name", &single_line(&item.name)));
    print(ui, &kv(ui, "Stock", &quantity(ui, item.stock)));
    print(ui, &kv(ui, "Price", &money(ui, item.price)));
    print(ui, &kv(ui, "Value", &money(ui, item.line_value())));
    print(ui, &kv(ui, "Created", &item.created_at.to_string()));
    print(ui, &kv(ui, "Updated", &item.updated_at.to_string()));
}

/// Print search matches in store order.
pub fn print_search_results(ui: &UiContext, keyword: &str, items: &[&Item]) {
    print(ui, &header(ui, "search", Some(keyword), None));

    if items.is_empty() {
        print(ui, &format!("No items match \"{}\".", keyword));
        return;
    }

    let columns = [
        Column::new("ID"),
        Column::new("Name"),
        Column::numeric("Stock"),
        Column::numeric("Price"),
    ];
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.id.clone(),
                display_name(ui, &item.name),
                quantity(ui, item.stock),
                money(ui, item.price),
            ]
        })
        .collect();
    print(ui, &table(ui, &columns, &rows));
    if ui.mode.is_pretty() {
        blank_line(ui);
        print(ui, &format!("{} found", items.len()));
    }
}

/// Print the aggregate report.
pub fn print_summary(ui: &UiContext, summary: Option<&InventorySummary>) {
    print(ui, &header(ui, "summary", None, None));

    let Some(summary) = summary else {
        print(ui, "Inventory is empty.");
        return;
    };

    let lowest = format!(
        "{} ({})",
        single_line(&summary.lowest_stock.name),
        quantity(ui, summary.lowest_stock.stock)
    );
    let highest = format!(
        "{} ({})",
        single_line(&summary.highest_value.item.name),
        money(ui, summary.highest_value.line_value)
    );

    print(ui, &kv(ui, "Items", &summary.item_count.to_string()));
    print(ui, &kv(ui, "Total stock", &quantity(ui, summary.total_stock)));
    print(ui, &kv(ui, "Total value", &money(ui, summary.total_value)));
    print(ui, &kv(ui, "Average value", &money(ui, summary.average_value)));
    print(ui, &kv(ui, "Lowest stock", &lowest));
    print(ui, &kv(ui, "Highest value", &highest));
}

/// Print the result of an add request.
pub fn print_add_outcome(ui: &UiContext, outcome: &AddOutcome) {
    match outcome {
        AddOutcome::Added(item) => {
            print(
                ui,
                &receipt(
                    ui,
                    "Item added",
                    &[
                        ("ID", item.id.clone()),
                        ("Name", single_line(&item.name)),
                        ("Stock", quantity(ui, item.stock)),
                        ("Price", money(ui, item.price)),
                    ],
                ),
            );
        }
        AddOutcome::Merged(change) => print_stock_change(ui, change),
        AddOutcome::Duplicate(existing) => {
            print(
                ui,
                &badge(
                    ui,
                    Badge::Info,
                    &format!(
                        "\"{}\" already exists with ID {}; nothing changed.",
                        single_line(&existing.name),
                        existing.id
                    ),
                ),
            );
        }
    }
}

/// Print the state of an item after an edit.
pub fn print_edited(ui: &UiContext, item: &Item) {
    print(
        ui,
        &receipt(
            ui,
            "Item updated",
            &[
                ("ID", item.id.clone()),
                ("Name", single_line(&item.name)),
                ("Stock", quantity(ui, item.stock)),
                ("Price", money(ui, item.price)),
                ("Updated", item.updated_at.to_string()),
            ],
        ),
    );
}

pub fn print_deleted(ui: &UiContext, item: &Item) {
    print(
        ui,
        &receipt(
            ui,
            "Item deleted",
            &[("ID", item.id.clone()), ("Name", single_line(&item.name))],
        ),
    );
}

/// Print a stock change, warning when stock is zero or below.
pub fn print_stock_change(ui: &UiContext, change: &StockChange) {
    print(
        ui,
        &receipt(
            ui,
            "Stock updated",
            &[
                ("ID", change.id.clone()),
                ("Name", single_line(&change.name)),
                ("Old stock", quantity(ui, change.old)),
                ("New stock", quantity(ui, change.new)),
            ],
        ),
    );
    if change.is_depleted() {
        print(
            ui,
            &badge(
                ui,
                Badge::Warn,
                &format!("{} is out of stock", single_line(&change.name)),
            ),
        );
    }
}

pub fn print_exported(ui: &UiContext, path: &Path, count: usize) {
    print(
        ui,
        &receipt(
            ui,
            "Inventory exported",
            &[
                ("Path", path.display().to_string()),
                ("Items", count.to_string()),
            ],
        ),
    );
}

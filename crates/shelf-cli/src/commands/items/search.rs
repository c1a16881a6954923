use shelf_core::InventoryError;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::helpers::parse_output_format;
use crate::output::{print_json, print_search_results};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let keyword = require_keyword(&args.keyword)?;
    let ui = ctx.ui_context(args.json, format);
    let store = ctx.open_store(&ui)?;

    let matches = store.search(keyword);
    if ui.mode.is_json() {
        return print_json(&matches);
    }
    print_search_results(&ui, keyword, &matches);
    Ok(())
}

/// Trimmed keyword; blank keywords would match every item.
pub fn require_keyword(keyword: &str) -> Result<&str, InventoryError> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::invalid_input("Search keyword cannot be empty"));
    }
    Ok(trimmed)
}

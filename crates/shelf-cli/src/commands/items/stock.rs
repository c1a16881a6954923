use crate::app::AppContext;
use crate::cli::StockArgs;
use crate::helpers::stock_adjustment;
use crate::output::{print_json, print_stock_change};

pub fn handle_stock(ctx: &AppContext, args: &StockArgs) -> anyhow::Result<()> {
    let adjustment = stock_adjustment(args)?;
    let ui = ctx.ui_context(args.json, None);
    let mut store = ctx.open_store(&ui)?;

    let change = store.adjust_stock(args.id.trim(), adjustment)?;
    if ui.mode.is_json() {
        return print_json(&change);
    }
    if !ctx.quiet() {
        print_stock_change(&ui, &change);
    }
    Ok(())
}

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::{print_json, print_listing};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, format);
    let store = ctx.open_store(&ui)?;

    let listing = store.list_items();
    if ui.mode.is_json() {
        return print_json(&listing);
    }
    print_listing(&ui, &listing, !args.no_details, store.path());
    Ok(())
}

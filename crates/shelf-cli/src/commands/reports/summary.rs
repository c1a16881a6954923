use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::output::{print_json, print_summary, summary_json};

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None);
    let store = ctx.open_store(&ui)?;

    let summary = store.summary();
    if ui.mode.is_json() {
        return print_json(&summary_json(summary.as_ref()));
    }
    print_summary(&ui, summary.as_ref());
    Ok(())
}

use shelf_core::parse::{parse_price, parse_stock};
use shelf_core::{AddOutcome, DuplicateDecision, Item, NewItem};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{confirm, is_interactive};
use crate::output::print_add_outcome;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let new = NewItem::new(
        args.name.trim(),
        parse_stock(&args.stock)?,
        parse_price(&args.price)?,
    );
    let mut store = ctx.open_store(&ui)?;

    let interactive = is_interactive(args.no_input);
    let merge = args.merge;
    let added_stock = new.stock;
    let mut prompt_error = None;
    let outcome = store.add_item_with(new, |existing| {
        if merge {
            DuplicateDecision::Merge
        } else if interactive {
            merge_decision(existing, added_stock, &mut prompt_error)
        } else {
            DuplicateDecision::Reject
        }
    })?;
    if let Some(err) = prompt_error {
        return Err(err);
    }

    // Scripts get a distinct failure for a name clash they did not resolve
    if !interactive && matches!(outcome, AddOutcome::Duplicate(_)) {
        outcome.require_added()?;
        return Ok(());
    }

    if !ctx.quiet() {
        print_add_outcome(&ui, &outcome);
    }
    Ok(())
}

/// Ask whether `added` units should go into the existing item's stock.
///
/// A failed prompt counts as a refusal; the error is kept in `prompt_error`.
pub fn merge_decision(
    existing: &Item,
    added: i64,
    prompt_error: &mut Option<anyhow::Error>,
) -> DuplicateDecision {
    let question = format!(
        "\"{}\" already exists with ID {} (stock {}). Add {} to its stock?",
        existing.name, existing.id, existing.stock, added
    );
    match confirm(&question, false) {
        Ok(true) => DuplicateDecision::Merge,
        Ok(false) => DuplicateDecision::Reject,
        Err(err) => {
            *prompt_error = Some(err);
            DuplicateDecision::Reject
        }
    }
}

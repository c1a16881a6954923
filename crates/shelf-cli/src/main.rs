//! Shelf CLI - inventory tracking for a small shop
//!
//! This is the command-line interface for Shelf. It wraps the core library
//! with one-shot commands and an interactive menu.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{init, items, menu, misc, reports};
use crate::errors::{exit_code_for, message_and_hint};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let (message, hint) = message_and_hint(&e);
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Menu) => menu::handle_menu(ctx),
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Add(args)) => items::handle_add(ctx, args),
        Some(Commands::List(args)) => items::handle_list(ctx, args),
        Some(Commands::Show(args)) => items::handle_show(ctx, args),
        Some(Commands::Edit(args)) => items::handle_edit(ctx, args),
        Some(Commands::Delete(args)) => items::handle_delete(ctx, args),
        Some(Commands::Search(args)) => items::handle_search(ctx, args),
        Some(Commands::Stock(args)) => items::handle_stock(ctx, args),
        Some(Commands::Export(args)) => reports::handle_export(ctx, args),
        Some(Commands::Summary(args)) => reports::handle_summary(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
    }
}

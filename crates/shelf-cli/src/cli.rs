use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use shelf_core::VERSION;

/// Shelf - inventory tracking for a small shop
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the inventory data file
    #[arg(short, long, global = true, env = "SHELF_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path of the inventory data file to record in the config
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Currency prefix for amounts (e.g. "Rp")
    #[arg(long)]
    pub currency: Option<String>,

    /// Default directory for CSV exports
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Item name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Units on hand
    #[arg(long, allow_hyphen_values = true)]
    pub stock: String,

    /// Unit price
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Add the stock to an existing item with the same name
    #[arg(long)]
    pub merge: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Hide created/updated timestamps
    #[arg(long)]
    pub no_details: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New stock
    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<String>,

    /// New unit price
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in names and IDs
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `stock` command
#[derive(Args)]
#[command(group(ArgGroup::new("adjustment").required(true).args(["set", "add", "remove"])))]
pub struct StockArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Replace the stock with this value
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub set: Option<String>,

    /// Add units to the stock
    #[arg(long, value_name = "N")]
    pub add: Option<String>,

    /// Remove units from the stock (never goes below zero)
    #[arg(long, value_name = "N")]
    pub remove: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination CSV file (defaults to a timestamped name)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file pointing at an inventory data file
    Init(InitArgs),

    /// Open the interactive menu (default when no command is given)
    Menu,

    /// Add a new item
    Add(AddArgs),

    /// List all items sorted by name
    List(ListArgs),

    /// Show one item
    Show(ShowArgs),

    /// Change an item's name, stock or price
    Edit(EditArgs),

    /// Delete an item
    Delete(DeleteArgs),

    /// Search items by name or ID
    Search(SearchArgs),

    /// Set, add to or remove from an item's stock
    Stock(StockArgs),

    /// Export all items to a CSV file
    Export(ExportArgs),

    /// Show inventory totals
    Summary(SummaryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_stock_requires_exactly_one_adjustment() {
        assert!(Cli::try_parse_from(["shelf", "stock", "ITM1"]).is_err());
        assert!(Cli::try_parse_from(["shelf", "stock", "ITM1", "--set", "1", "--add", "2"]).is_err());
        assert!(Cli::try_parse_from(["shelf", "stock", "ITM1", "--remove", "2"]).is_ok());
    }

    #[test]
    fn test_no_command_parses() {
        let cli = Cli::try_parse_from(["shelf"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["shelf", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_add_accepts_negative_looking_values() {
        let cli = Cli::try_parse_from(["shelf", "add", "Kopi", "--stock", "-3", "--price", "10"])
            .unwrap();
        match cli.command {
            Some(Commands::Add(args)) => assert_eq!(args.stock, "-3"),
            _ => panic!("expected add"),
        }
    }
}

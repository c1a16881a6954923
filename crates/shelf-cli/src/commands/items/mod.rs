//! Item command handlers.

mod add;
mod delete;
mod edit;
mod list;
mod search;
mod show;
mod stock;

pub use add::{handle_add, merge_decision};
pub use delete::handle_delete;
pub use edit::{handle_edit, prompt_patch};
pub use list::handle_list;
pub use search::{handle_search, require_keyword};
pub use show::handle_show;
pub use stock::handle_stock;

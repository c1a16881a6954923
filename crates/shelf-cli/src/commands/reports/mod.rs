//! Report command handlers.

mod export;
mod summary;

pub use export::{handle_export, with_csv_extension};
pub use summary::handle_summary;

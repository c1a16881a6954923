//! Output formatting helpers for the CLI.
//!
//! This module provides:
//! - JSON payloads (`json`)
//! - Text, table and receipt rendering (`text`)

mod json;
mod text;

pub use json::{print_json, summary_json};
pub use text::{
    print_add_outcome, print_deleted, print_edited, print_exported, print_item, print_listing,
    print_search_results, print_stock_change, print_summary,
};

//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Interactive prompts (`input`)
//! - Output format and argument parsing (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, is_interactive, prompt_required, prompt_select, prompt_text};
pub use parsing::{
    parse_amount, parse_optional_price, parse_optional_stock, parse_output_format,
    stock_adjustment,
};

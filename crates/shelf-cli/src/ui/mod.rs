//! Terminal rendering for Shelf.
//!
//! - `context`: terminal detection and `UiContext`
//! - `mode`: choosing json / plain / pretty output
//! - `theme`: badges and owo-colors styles
//! - `render`: headers, key-value lines, receipts, comfy-table tables
//! - `format`: truncation and number grouping
//!
//! Commands build one `UiContext` through `AppContext::ui_context` and pass
//! it to the renderers; JSON output bypasses them entirely.

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::{Terminal, UiContext, UiOptions};
pub use mode::{OutputFormat, OutputMode};
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, print, print_error, receipt, table, Column,
};

pub use format::{format_money, truncate};

//! Rendering primitives shared by the command handlers.
//!
//! Each function returns a `String` laid out for the context's mode; the
//! `print*` helpers decide where it goes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

const MAX_PATH_CHARS: usize = 50;

/// Title line for a command, e.g. `Shelf · search (kopi)`.
///
/// Plain output gets a bare `shelf <command>` marker and JSON gets nothing.
/// `path` adds a `File:` line in pretty mode.
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>, path: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Json => String::new(),
        OutputMode::Plain => format!("shelf {}", command),
        OutputMode::Pretty => {
            let title = styled("Shelf", styles::bold(), ctx.color);
            let mut out = format!("{} \u{00B7} {}", title, command);
            if let Some(context) = context {
                out.push_str(&format!(" ({})", context));
            }
            if let Some(path) = path {
                out.push('\n');
                out.push_str(&kv(ctx, "File", &shorten_path(path)));
            }
            out
        }
    }
}

/// Keep the tail of long paths, where the file name is.
fn shorten_path(path: &str) -> String {
    let count = path.chars().count();
    if count <= MAX_PATH_CHARS {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - (MAX_PATH_CHARS - 3)).collect();
    format!("...{}", tail)
}

pub fn divider(ctx: &UiContext) -> String {
    if !ctx.mode.is_pretty() {
        return "---".to_string();
    }
    let rule = if ctx.unicode { "\u{2500}" } else { "-" };
    rule.repeat(ctx.width.min(60))
}

/// Status marker such as `[OK]`, followed by `message` when non-empty.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let marker = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    match message {
        "" => marker,
        text => format!("{} {}", marker, text),
    }
}

/// `Key: value` for people, `key=value` for scripts.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", label, value)
    } else {
        format!("{}={}", plain_key(key), value)
    }
}

fn plain_key(key: &str) -> String {
    key.to_lowercase().replace(' ', "_")
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Confirmation block printed after a change.
///
/// Pretty output is an `[OK]` badge with indented fields; plain output starts
/// with `status=ok`.
pub fn receipt(ctx: &UiContext, title: &str, fields: &[(&str, String)]) -> String {
    let (first, indent) = if ctx.mode.is_pretty() {
        (badge(ctx, Badge::Ok, title), "  ")
    } else {
        ("status=ok".to_string(), "")
    };
    std::iter::once(first)
        .chain(
            fields
                .iter()
                .map(|(key, value)| format!("{}{}", indent, kv(ctx, key, value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// Table column heading.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    /// Right-align quantities and amounts
    pub numeric: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

/// Bordered table in pretty mode; headerless tab-separated rows otherwise.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(ctx.width.min(u16::MAX as usize) as u16);

    table.set_header(columns.iter().map(|column| {
        let cell = Cell::new(column.header);
        if ctx.color {
            cell.add_attribute(Attribute::Bold)
        } else {
            cell
        }
    }));
    for row in rows {
        table.add_row(row);
    }
    for (index, column) in columns.iter().enumerate() {
        if !column.numeric {
            continue;
        }
        if let Some(target) = table.column_mut(index) {
            target.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}

/// Write `message` to stdout unless the command is in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() && !message.is_empty() {
        println!("{}", message);
    }
}

pub fn blank_line(ctx: &UiContext) {
    if !ctx.mode.is_json() {
        println!();
    }
}

/// Report a failure on stderr, as a JSON object in JSON mode.
pub fn print_error(ctx: &UiContext, message: &str, hint_text: Option<&str>) {
    if ctx.mode.is_json() {
        let mut payload = serde_json::json!({ "error": message });
        if let Some(text) = hint_text {
            payload["hint"] = serde_json::Value::from(text);
        }
        eprintln!("{}", payload);
        return;
    }

    eprintln!("{}", badge(ctx, Badge::Err, message));
    if let Some(text) = hint_text {
        eprintln!("{}", hint(ctx, text));
    }
}

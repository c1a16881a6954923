//! CSV export.
//!
//! One header row followed by one row per item, in store order. Numbers are
//! written plainly with no currency formatting. Fields are quoted per
//! RFC 4180 only when they contain a delimiter, a quote or a line break.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::item::{Item, Timestamp};

/// Column headings of the export file.
pub const CSV_HEADER: [&str; 7] = [
    "ID",
    "Nama",
    "Stok",
    "Harga",
    "Total Nilai",
    "Tanggal Dibuat",
    "Tanggal Diupdate",
];

const LINE_END: &str = "\r\n";

/// File name used when the caller does not choose one.
pub fn default_export_name(now: Timestamp) -> String {
    format!("inventory_export_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Write `items` as CSV to `writer`.
pub fn write_csv<W: Write>(mut writer: W, items: &[Item]) -> io::Result<()> {
    write_row(&mut writer, CSV_HEADER.iter().map(|h| h.to_string()))?;
    for item in items {
        write_row(
            &mut writer,
            [
                item.id.clone(),
                item.name.clone(),
                item.stock.to_string(),
                item.price.to_string(),
                item.line_value().to_string(),
                item.created_at.to_string(),
                item.updated_at.to_string(),
            ],
        )?;
    }
    writer.flush()
}

fn write_row<W: Write>(writer: &mut W, fields: impl IntoIterator<Item = String>) -> io::Result<()> {
    let line = fields
        .into_iter()
        .map(|field| csv_field(&field).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    writer.write_all(line.as_bytes())?;
    writer.write_all(LINE_END.as_bytes())
}

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

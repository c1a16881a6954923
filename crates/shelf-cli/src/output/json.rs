//! JSON output formatting.

use serde::Serialize;

use shelf_core::InventorySummary;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("Failed to render JSON: {}", e))?;
    println!("{}", rendered);
    Ok(())
}

/// Summary payload; an empty inventory reports zero counts only.
pub fn summary_json(summary: Option<&InventorySummary>) -> serde_json::Value {
    match summary {
        Some(summary) => serde_json::to_value(summary).unwrap_or(serde_json::Value::Null),
        None => serde_json::json!({
            "item_count": 0,
            "total_stock": 0,
            "total_value": 0.0,
        }),
    }
}

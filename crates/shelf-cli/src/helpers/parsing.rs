//! Parsing helpers for output format and numeric arguments.

use shelf_core::parse::{parse_price, parse_stock};
use shelf_core::{InventoryError, StockAdjustment};

use crate::cli::StockArgs;
use crate::errors::CliError;
use crate::ui::OutputFormat;

/// Parse the `--format` value of list/search commands.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    OutputFormat::parse(raw).map(Some).ok_or_else(|| {
        CliError::invalid_input(format!("Unsupported format: {} (use table or plain)", raw))
            .into()
    })
}

pub fn parse_optional_stock(value: Option<&str>) -> anyhow::Result<Option<i64>> {
    Ok(value.map(parse_stock).transpose()?)
}

pub fn parse_optional_price(value: Option<&str>) -> anyhow::Result<Option<f64>> {
    Ok(value.map(parse_price).transpose()?)
}

/// Build the stock adjustment requested by `shelf stock`.
///
/// `--add` and `--remove` take a non-negative amount; `--set` takes any
/// whole number.
pub fn stock_adjustment(args: &StockArgs) -> anyhow::Result<StockAdjustment> {
    if let Some(value) = args.set.as_deref() {
        return Ok(StockAdjustment::Set(parse_stock(value)?));
    }
    if let Some(value) = args.add.as_deref() {
        return Ok(StockAdjustment::Increase(parse_amount(value)?));
    }
    if let Some(value) = args.remove.as_deref() {
        return Ok(StockAdjustment::Decrease(parse_amount(value)?));
    }
    Err(CliError::invalid_input("One of --set, --add or --remove is required").into())
}

/// Parse a non-negative adjustment amount.
pub fn parse_amount(value: &str) -> anyhow::Result<i64> {
    let amount = parse_stock(value)?;
    if amount < 0 {
        return Err(InventoryError::invalid_input(format!(
            "Amount cannot be negative: {}",
            amount
        ))
        .into());
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_args(set: Option<&str>, add: Option<&str>, remove: Option<&str>) -> StockArgs {
        StockArgs {
            id: "ITM1".to_string(),
            set: set.map(String::from),
            add: add.map(String::from),
            remove: remove.map(String::from),
            json: false,
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        let err = parse_output_format(Some("csv")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_optional_numbers() {
        assert_eq!(parse_optional_stock(Some(" 7 ")).unwrap(), Some(7));
        assert_eq!(parse_optional_stock(None).unwrap(), None);
        assert_eq!(parse_optional_price(Some("2.5")).unwrap(), Some(2.5));
        assert!(parse_optional_price(Some("abc")).is_err());
    }

    #[test]
    fn test_stock_adjustment_variants() {
        assert_eq!(
            stock_adjustment(&stock_args(Some("-2"), None, None)).unwrap(),
            StockAdjustment::Set(-2)
        );
        assert_eq!(
            stock_adjustment(&stock_args(None, Some("5"), None)).unwrap(),
            StockAdjustment::Increase(5)
        );
        assert_eq!(
            stock_adjustment(&stock_args(None, None, Some("3"))).unwrap(),
            StockAdjustment::Decrease(3)
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = stock_adjustment(&stock_args(None, Some("-5"), None)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::InvalidInput(_))
        ));
    }
}

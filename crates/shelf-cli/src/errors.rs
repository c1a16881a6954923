//! CLI error types for structured error handling.
//!
//! Core errors travel through `anyhow` unchanged; this module maps both
//! them and CLI-only errors to exit codes and hints.

use std::fmt;

use shelf_core::InventoryError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file, etc.)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for an error returned by a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(core) = err.downcast_ref::<InventoryError>() {
        return match core {
            InventoryError::NotFound(_) => exit_codes::NOT_FOUND,
            InventoryError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            InventoryError::DuplicateName { .. } => exit_codes::DUPLICATE_NAME,
            InventoryError::Io(_) | InventoryError::Format(_) => exit_codes::IO_FAILURE,
        };
    }
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    exit_codes::FAILURE
}

/// Split an error into its message and an optional hint.
///
/// Explicit "\nHint:" suffixes win; otherwise common core errors get a
/// contextual hint. Hints are returned without the "Hint:" label.
pub fn message_and_hint(err: &anyhow::Error) -> (String, Option<String>) {
    let message = err.to_string();
    if let Some(idx) = message.find("\nHint:") {
        let (head, tail) = message.split_at(idx);
        let hint = tail.trim_start_matches("\nHint:").trim().to_string();
        return (head.to_string(), Some(hint));
    }

    let hint = match err.downcast_ref::<InventoryError>() {
        Some(InventoryError::NotFound(_)) => {
            Some("Run `shelf list` to find item IDs.".to_string())
        }
        Some(InventoryError::DuplicateName { .. }) => Some(
            "Re-run with --merge to add the stock to the existing item.".to_string(),
        ),
        Some(InventoryError::Io(_)) => {
            Some("Check that the path exists and is writable.".to_string())
        }
        Some(InventoryError::Format(_)) => Some(
            "The inventory file is not valid JSON; restore it from a copy or move it aside."
                .to_string(),
        ),
        _ => None,
    };
    (message, hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let cases = [
            (InventoryError::not_found("X"), exit_codes::NOT_FOUND),
            (InventoryError::invalid_input("bad"), exit_codes::INVALID_INPUT),
            (
                InventoryError::DuplicateName {
                    name: "Kopi".into(),
                    id: "ITM1".into(),
                },
                exit_codes::DUPLICATE_NAME,
            ),
            (InventoryError::Io("disk".into()), exit_codes::IO_FAILURE),
            (InventoryError::Format("json".into()), exit_codes::IO_FAILURE),
        ];
        for (err, code) in cases {
            assert_eq!(exit_code_for(&anyhow::Error::new(err)), code);
        }
    }

    #[test]
    fn test_cli_errors_map_to_exit_codes() {
        let err = anyhow::Error::new(CliError::invalid_input("no"));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
        let err = anyhow::Error::new(CliError::not_found("gone", "Hint: look"));
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_other_errors_are_general_failures() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&err), exit_codes::FAILURE);
    }

    #[test]
    fn test_explicit_hint_is_split_off() {
        let err = anyhow::Error::new(CliError::not_found("No config", "Hint: Run `shelf init`"));
        let (message, hint) = message_and_hint(&err);
        assert_eq!(message, "No config");
        assert_eq!(hint.as_deref(), Some("Run `shelf init`"));
    }

    #[test]
    fn test_not_found_gets_contextual_hint() {
        let err = anyhow::Error::new(InventoryError::not_found("ITM9"));
        let (message, hint) = message_and_hint(&err);
        assert_eq!(message, "Item not found: ITM9");
        assert!(hint.unwrap().contains("shelf list"));
    }
}

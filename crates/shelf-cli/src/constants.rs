//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Item or file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// An item with the same name already exists.
    pub const DUPLICATE_NAME: i32 = 5;

    /// Reading or writing a file failed.
    pub const IO_FAILURE: i32 = 6;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SHELF_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SHELF_LOG";

/// Directory name under the XDG config and data homes.
pub const APP_DIR: &str = "shelf";

/// File name of the default inventory data file.
pub const DEFAULT_DATA_FILE: &str = "inventory_data.json";

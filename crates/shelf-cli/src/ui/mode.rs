//! Output mode selection.

use super::context::Terminal;

/// Layout requested with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "plain" => Some(OutputFormat::Plain),
            _ => None,
        }
    }
}

/// How a command renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// JSON on stdout and nothing else
    Json,
    /// Tab-separated rows and `key=value` lines for scripts
    #[default]
    Plain,
    /// Tables, grouped money and badges for people
    Pretty,
}

impl OutputMode {
    /// `--json` beats `--format`, and an explicit `--format` beats terminal
    /// detection. Left to itself, pretty output needs a non-dumb TTY.
    pub fn select(json: bool, format: Option<OutputFormat>, terminal: &Terminal) -> Self {
        match (json, format) {
            (true, _) => OutputMode::Json,
            (false, Some(OutputFormat::Plain)) => OutputMode::Plain,
            (false, Some(OutputFormat::Table)) => OutputMode::Pretty,
            (false, None) if terminal.supports_pretty() => OutputMode::Pretty,
            (false, None) => OutputMode::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        *self == OutputMode::Json
    }

    pub fn is_pretty(&self) -> bool {
        *self == OutputMode::Pretty
    }
}

//! Interactive prompt helpers.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

/// Whether prompts may be shown: both ends are terminals and `--no-input`
/// was not passed.
pub fn is_interactive(no_input: bool) -> bool {
    !no_input && std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Ask a yes/no question.
pub fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

/// Read a line of text; blank answers are allowed and returned trimmed.
pub fn prompt_text(prompt: &str) -> anyhow::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map(|value| value.trim().to_string())
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
}

/// Read a line of text, asking again until it is not blank.
pub fn prompt_required(prompt: &str) -> anyhow::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), &'static str> {
            if value.trim().is_empty() {
                Err("A value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map(|value| value.trim().to_string())
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
}

/// Pick one of `items`, returning its index.
pub fn prompt_select(prompt: &str, items: &[&str], default: usize) -> anyhow::Result<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read selection: {}", e))
}

//! Prompts
//!
//! Interactive terminal prompts for the setup tool.
//! Uses the `dialoguer` crate for input handling.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

/// Prompt the user for a single line of input.
///
/// Empty input is accepted and returned as-is; callers decide how to
/// interpret it. No validation is applied.
pub fn prompt_line(label: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("  {} {}", "\u{2192}".cyan(), label.white()))
        .allow_empty(true)
        .interact_text()?;

    Ok(value)
}

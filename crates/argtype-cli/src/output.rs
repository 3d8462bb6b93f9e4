//! Output formatting utilities

use argtype::ArgTypeError;
use colored::Colorize;
use std::io::IsTerminal;

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stderr().is_terminal()),
    }
}

/// Format an error for display.
///
/// Argument type errors render one diagnostic per failed value; anything
/// else is shown as a plain error line.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ArgTypeError>() {
        Some(err) => err
            .to_diagnostics()
            .iter()
            .map(|d| d.render_colored())
            .collect::<Vec<_>>()
            .join("\n"),
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

/// Format a list of values, one per line
pub fn format_lines(values: &[String]) -> String {
    if values.is_empty() {
        return "(empty list)".to_string();
    }
    values.join("\n")
}

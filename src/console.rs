use colored::Colorize;

use crate::config::DemoConfig;

/// Applies the color preference and installs diagnostics for a demo binary.
/// With `color` on, `colored` still decides from the terminal and `NO_COLOR`.
pub fn init(config: &DemoConfig) {
    if !config.color {
        colored::control::set_override(false);
    }
    crate::logging::init(config);
}

pub fn banner(title: &str) -> String {
    format!("{}\n{}", title.bold(), "=".repeat(title.chars().count()))
}

pub fn section(title: &str) -> String {
    format!("=== {title} ===").cyan().bold().to_string()
}

pub fn failure(message: &str) -> String {
    message.red().to_string()
}

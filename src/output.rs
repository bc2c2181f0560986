//! # Output Configuration
//!
//! This module provides utilities for controlling CLI output appearance,
//! including color support based on terminal capabilities and user
//! preferences, plus the status-line helpers the commands print with.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use console::style;

use crate::document::Item;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Behavior
    /// - `--color=always`: Force colors on (overrides NO_COLOR)
    /// - `--color=never`: Force colors off
    /// - `--color=auto`: Detect based on environment
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // Check NO_COLOR first (https://no-color.org/)
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        // Check CLICOLOR=0 disables colors
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        // Check CLICOLOR_FORCE=1 forces colors
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        // Check TERM=dumb
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        // Use console crate's detection for TTY and color support
        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Print an informational message.
pub fn info(config: &OutputConfig, message: &str) {
    println!("{} {}", paint(config, "ℹ", Paint::Blue), message);
}

/// Print a success message.
pub fn success(config: &OutputConfig, message: &str) {
    println!("{} {}", paint(config, "✓", Paint::Green), message);
}

/// Print a warning message.
pub fn warning(config: &OutputConfig, message: &str) {
    println!("{} {}", paint(config, "⚠", Paint::Yellow), message);
}

/// Print an error message to stderr.
pub fn error(config: &OutputConfig, message: &str) {
    eprintln!("{} {}", paint(config, "✗", Paint::Red), message);
}

/// Print a short preview of a document: its item names, up to a cap.
pub fn preview(config: &OutputConfig, title: &str, document: &[Item]) {
    const PREVIEW_LIMIT: usize = 5;

    if document.is_empty() {
        println!("\n{}: empty\n", paint(config, title, Paint::Cyan));
        return;
    }

    println!("\n{} ({} item(s)):", paint(config, title, Paint::Cyan), document.len());
    for item in document.iter().take(PREVIEW_LIMIT) {
        println!("  - {}", item.name().unwrap_or("<unnamed>"));
    }
    if document.len() > PREVIEW_LIMIT {
        println!("  ... ({} more)", document.len() - PREVIEW_LIMIT);
    }
    println!();
}

enum Paint {
    Blue,
    Green,
    Yellow,
    Red,
    Cyan,
}

fn paint(config: &OutputConfig, text: &str, color: Paint) -> String {
    if !config.use_color {
        return text.to_string();
    }
    let styled = match color {
        Paint::Blue => style(text).blue(),
        Paint::Green => style(text).green(),
        Paint::Yellow => style(text).yellow(),
        Paint::Red => style(text).red(),
        Paint::Cyan => style(text).cyan(),
    };
    styled.force_styling(true).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("never");
        assert!(!config.use_color);
    }

    #[test]
    fn test_paint_without_color_is_plain() {
        let config = OutputConfig::without_color();
        assert_eq!(paint(&config, "✓", Paint::Green), "✓");
    }

    #[test]
    fn test_paint_with_color_adds_escapes() {
        let config = OutputConfig::with_color();
        let painted = paint(&config, "✓", Paint::Green);
        assert!(painted.contains('\u{1b}'));
    }
}

//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `modeset` application. It uses the `thiserror` library to create an
//! `Error` enum covering every failure mode the engine can report,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum representing all failure outcomes. The
//!   taxonomy distinguishes caller mistakes (`InvalidInput`,
//!   `PathNotConfigured`) from well-formed operations that had no effect
//!   (`NoMatch`, `NothingToDo`) and from I/O or parse failures.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! Cycle detection during group resolution is deliberately *not* an error:
//! it is surfaced as a warning diagnostic and the offending name is dropped
//! from the expansion. Only the validation pre-flight gate escalates cycles
//! to `InvalidInput`.

use thiserror::Error;

/// Main error type for modeset operations
#[derive(Error, Debug)]
pub enum Error {
    /// The caller supplied malformed input: an empty name list, an empty
    /// name, or a document whose structure cannot be reconciled.
    #[error("Invalid input: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    InvalidInput {
        message: String,
        /// Optional hint for how to fix the input
        hint: Option<String>,
    },

    /// A required document path was neither passed as a flag nor previously
    /// stored with the `config` command.
    #[error("{document} document path not set{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    PathNotConfigured {
        /// Which document the missing path designates ("Main" or "Active")
        document: String,
        /// Optional hint for how to configure the path
        hint: Option<String>,
    },

    /// A source document could not be read or parsed.
    #[error("Document not found or unreadable: {path}")]
    NotFound { path: String },

    /// The operation was well formed but nothing in the catalog or the
    /// selection matched the requested names.
    #[error("No match: {message}")]
    NoMatch { message: String },

    /// The operation was well formed but would not change the selection.
    #[error("Nothing to do: {message}")]
    NothingToDo { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing or serialization error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Shorthand for an `InvalidInput` without a hint.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let error = Error::invalid_input("At least one name is required");
        let display = format!("{}", error);
        assert!(display.contains("Invalid input"));
        assert!(display.contains("At least one name is required"));
        assert!(!display.contains("hint:"));
    }

    #[test]
    fn test_error_display_invalid_input_with_hint() {
        let error = Error::InvalidInput {
            message: "Document must be a sequence".to_string(),
            hint: Some("Wrap the items in a YAML list".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("hint:"));
        assert!(display.contains("Wrap the items"));
    }

    #[test]
    fn test_error_display_path_not_configured() {
        let error = Error::PathNotConfigured {
            document: "Active".to_string(),
            hint: Some("Use --active or set it with the config command".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("Active document path not set"));
        assert!(display.contains("--active"));
    }

    #[test]
    fn test_error_display_no_match() {
        let error = Error::NoMatch {
            message: "no matching modes found in the main document".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("No match"));
        assert!(display.contains("main document"));
    }

    #[test]
    fn test_error_display_nothing_to_do() {
        let error = Error::NothingToDo {
            message: "all requested modes are already active".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Nothing to do"));
        assert!(display.contains("already active"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_yaml_error() {
        let yaml_str = "invalid: [unclosed";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: Error = yaml_error.into();
        let display = format!("{}", error);
        assert!(display.contains("YAML error"));
    }
}

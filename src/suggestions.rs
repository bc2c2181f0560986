//! # Error Suggestions
//!
//! Helper constructors for the hint-bearing errors the CLI layer raises.
//! Errors should tell users what went wrong AND how to fix it.

use crate::error::Error;

/// The main document path was neither passed nor configured.
pub fn main_path_not_set() -> Error {
    Error::PathNotConfigured {
        document: "Main".to_string(),
        hint: Some("Use -m/--main or set it with `modeset config --set-main <PATH>`".to_string()),
    }
}

/// The active document path was neither passed nor configured.
pub fn active_path_not_set() -> Error {
    Error::PathNotConfigured {
        document: "Active".to_string(),
        hint: Some(
            "Use -a/--active or set it with `modeset config --set-active <PATH>`".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_path_not_set_mentions_flag_and_config() {
        let display = format!("{}", main_path_not_set());
        assert!(display.contains("Main document path not set"));
        assert!(display.contains("--main"));
        assert!(display.contains("config --set-main"));
    }

    #[test]
    fn test_active_path_not_set_mentions_flag_and_config() {
        let display = format!("{}", active_path_not_set());
        assert!(display.contains("Active document path not set"));
        assert!(display.contains("--active"));
    }
}

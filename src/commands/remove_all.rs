//! # Remove-All Command Implementation
//!
//! This module implements the `remove-all` subcommand, which clears the
//! active document by persisting an explicitly empty container.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use modeset::ops;
use modeset::output::{self, OutputConfig};
use modeset::settings::Settings;
use modeset::suggestions;

/// Remove all modes from the active document
#[derive(Args, Debug)]
pub struct RemoveAllArgs {
    /// Path to the active document
    #[arg(short, long, value_name = "PATH", env = "MODESET_ACTIVE")]
    pub active: Option<PathBuf>,
}

/// Execute the `remove-all` command.
pub fn execute(args: RemoveAllArgs, output: &OutputConfig) -> Result<()> {
    let settings = Settings::load()?;
    let active_path = args
        .active
        .or(settings.active_path)
        .ok_or_else(suggestions::active_path_not_set)?;

    output::info(
        output,
        &format!("Removing all modes from: {}", active_path.display()),
    );

    match ops::remove_all(&active_path) {
        Ok(report) => {
            output::success(output, "Removed all modes from the active document");
            output::preview(output, "Active document", &report.document);
            Ok(())
        }
        Err(e) => {
            output::error(output, "Failed to clear the active document");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_execute_clears_selection() {
        let temp = TempDir::new().unwrap();
        std::env::set_var(modeset::settings::CONFIG_DIR_ENV, temp.path());
        let active = temp.path().join("active.yaml");
        fs::write(&active, "customModes:\n- name: a\n").unwrap();

        let result = execute(
            RemoveAllArgs {
                active: Some(active.clone()),
            },
            &OutputConfig::without_color(),
        );
        assert!(result.is_ok());
        assert!(fs::read_to_string(&active)
            .unwrap()
            .contains("customModes: []"));
        std::env::remove_var(modeset::settings::CONFIG_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_execute_without_active_path_fails() {
        let temp = TempDir::new().unwrap();
        std::env::set_var(modeset::settings::CONFIG_DIR_ENV, temp.path());

        let result = execute(
            RemoveAllArgs { active: None },
            &OutputConfig::without_color(),
        );
        assert!(result.is_err());
        std::env::remove_var(modeset::settings::CONFIG_DIR_ENV);
    }
}

//! # Add Command Implementation
//!
//! This module implements the `add` subcommand, which copies modes from the
//! main document into the active document. Group names expand recursively
//! into their member modes before the copy.
//!
//! ## Functionality
//!
//! - **Names argument**: one or more mode or group names
//! - **Path resolution**: `-m`/`-a` flags win over persisted settings
//! - **Diagnostics**: missing names, duplicates and cycle skips print as
//!   warnings; the command still succeeds as long as something was added

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use modeset::ops;
use modeset::output::{self, OutputConfig};
use modeset::settings::Settings;
use modeset::suggestions;

/// Add modes from the main document to the active document
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Names of modes or groups to add (space-separated)
    #[arg(value_name = "NAMES", required = true)]
    pub names: Vec<String>,

    /// Path to the main document
    #[arg(short, long, value_name = "PATH", env = "MODESET_MAIN")]
    pub main: Option<PathBuf>,

    /// Path to the active document
    #[arg(short, long, value_name = "PATH", env = "MODESET_ACTIVE")]
    pub active: Option<PathBuf>,
}

/// Execute the `add` command.
pub fn execute(args: AddArgs, output: &OutputConfig) -> Result<()> {
    let settings = Settings::load()?;
    let main_path = args
        .main
        .or(settings.main_path)
        .ok_or_else(suggestions::main_path_not_set)?;
    let active_path = args
        .active
        .or(settings.active_path)
        .ok_or_else(suggestions::active_path_not_set)?;

    output::info(output, &format!("Adding modes: {}", args.names.join(", ")));
    output::info(output, &format!("From: {}", main_path.display()));
    output::info(output, &format!("To: {}", active_path.display()));

    match ops::add(&args.names, &main_path, &active_path) {
        Ok(report) => {
            for warning in &report.warnings {
                output::warning(output, warning);
            }
            output::success(
                output,
                &format!(
                    "Added {} mode(s) to the active document",
                    report.changed.len()
                ),
            );
            output::preview(output, "Active document", &report.document);
            Ok(())
        }
        Err(e) => {
            output::error(output, "Failed to add modes to the active document");
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

    fn args(names: &[&str], main: Option<PathBuf>, active: Option<PathBuf>) -> AddArgs {
        AddArgs {
            names: names.iter().map(|s| s.to_string()).collect(),
            main,
            active,
        }
    }

    #[test]
    #[serial]
    fn test_execute_adds_and_persists() {
        let temp = TempDir::new().unwrap();
        std::env::set_var(modeset::settings::CONFIG_DIR_ENV, temp.path());
        let main = temp.path().join("main.yaml");
        let active = temp.path().join("active.yaml");
        fs::write(&main, "- name: a\n- name: b\n").unwrap();

        let result = execute(
            args(&["a"], Some(main), Some(active.clone())),
            &OutputConfig::without_color(),
        );
        assert!(result.is_ok());
        let text = fs::read_to_string(&active).unwrap();
        assert!(text.contains("name: a"));
        std::env::remove_var(modeset::settings::CONFIG_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_execute_without_main_path_fails() {
        let temp = TempDir::new().unwrap();
        std::env::set_var(modeset::settings::CONFIG_DIR_ENV, temp.path());

        let result = execute(
            args(&["a"], None, Some(temp.path().join("active.yaml"))),
            &OutputConfig::without_color(),
        );
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Main document path not set"));
        std::env::remove_var(modeset::settings::CONFIG_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_execute_nothing_to_do_fails() {
        let temp = TempDir::new().unwrap();
        std::env::set_var(modeset::settings::CONFIG_DIR_ENV, temp.path());
        let main = temp.path().join("main.yaml");
        let active = temp.path().join("active.yaml");
        fs::write(&main, "- name: a\n").unwrap();
        fs::write(&active, "customModes:\n- name: a\n").unwrap();

        let result = execute(
            args(&["a"], Some(main), Some(active)),
            &OutputConfig::without_color(),
        );
        assert!(result.is_err());
        std::env::remove_var(modeset::settings::CONFIG_DIR_ENV);
    }
}

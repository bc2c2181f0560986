//! # Remove Command Implementation
//!
//! This module implements the `remove` subcommand, which removes modes from
//! the active document. Group names expand before removal: against the main
//! document when a path for it is available, otherwise against the active
//! document itself.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use modeset::ops;
use modeset::output::{self, OutputConfig};
use modeset::settings::Settings;
use modeset::suggestions;

/// Remove modes from the active document
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Names of modes or groups to remove (space-separated)
    #[arg(value_name = "NAMES", required = true)]
    pub names: Vec<String>,

    /// Path to the main document (used to expand group names)
    #[arg(short, long, value_name = "PATH", env = "MODESET_MAIN")]
    pub main: Option<PathBuf>,

    /// Path to the active document
    #[arg(short, long, value_name = "PATH", env = "MODESET_ACTIVE")]
    pub active: Option<PathBuf>,
}

/// Execute the `remove` command.
pub fn execute(args: RemoveArgs, output: &OutputConfig) -> Result<()> {
    let settings = Settings::load()?;
    // The main document is optional here; group expansion falls back to
    // the active document when it is absent.
    let main_path = args.main.or(settings.main_path);
    let active_path = args
        .active
        .or(settings.active_path)
        .ok_or_else(suggestions::active_path_not_set)?;

    output::info(
        output,
        &format!("Removing modes: {}", args.names.join(", ")),
    );
    output::info(output, &format!("From: {}", active_path.display()));

    match ops::remove(&args.names, main_path.as_deref(), &active_path) {
        Ok(report) => {
            for warning in &report.warnings {
                output::warning(output, warning);
            }
            output::success(
                output,
                &format!(
                    "Removed {} mode(s) from the active document",
                    report.changed.len()
                ),
            );
            output::preview(output, "Active document", &report.document);
            Ok(())
        }
        Err(e) => {
            output::error(output, "Failed to remove modes from the active document");
            Err(e.into())
        }
    }
}

//! # Remove-All-And-Add Command Implementation
//!
//! This module implements the `remove-all-and-add` subcommand: clear the
//! active document, then add the specified modes from the main document.
//! Two persisted steps in sequence; if the add step fails the selection
//! stays cleared, matching two separate invocations.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use modeset::ops;
use modeset::output::{self, OutputConfig};
use modeset::settings::Settings;
use modeset::suggestions;

/// Remove all modes, then add the specified ones
#[derive(Args, Debug)]
pub struct RemoveAllAndAddArgs {
    /// Names of modes or groups to add after clearing (space-separated)
    #[arg(value_name = "NAMES", required = true)]
    pub names: Vec<String>,

    /// Path to the main document
    #[arg(short, long, value_name = "PATH", env = "MODESET_MAIN")]
    pub main: Option<PathBuf>,

    /// Path to the active document
    #[arg(short, long, value_name = "PATH", env = "MODESET_ACTIVE")]
    pub active: Option<PathBuf>,
}

/// Execute the `remove-all-and-add` command.
pub fn execute(args: RemoveAllAndAddArgs, output: &OutputConfig) -> Result<()> {
    let settings = Settings::load()?;
    let main_path = args
        .main
        .or(settings.main_path)
        .ok_or_else(suggestions::main_path_not_set)?;
    let active_path = args
        .active
        .or(settings.active_path)
        .ok_or_else(suggestions::active_path_not_set)?;

    output::info(
        output,
        &format!("Removing all modes from: {}", active_path.display()),
    );
    output::info(
        output,
        &format!("Then adding modes: {}", args.names.join(", ")),
    );
    output::info(output, &format!("From: {}", main_path.display()));

    if let Err(e) = ops::remove_all(&active_path) {
        output::error(output, "Failed to clear the active document");
        return Err(e.into());
    }
    output::success(output, "Removed all modes from the active document");

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

//! # Config Command Implementation
//!
//! This module implements the `config` subcommand, which manages the
//! persisted default paths of the main and active documents. Setting a
//! path to a file that does not exist yet warns but succeeds; the file is
//! created on first write.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use modeset::output::{self, OutputConfig};
use modeset::settings::Settings;

/// Manage persisted default document paths
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Set the path to the main document
    #[arg(long, value_name = "PATH")]
    pub set_main: Option<PathBuf>,

    /// Set the path to the active document
    #[arg(long, value_name = "PATH")]
    pub set_active: Option<PathBuf>,

    /// Show the current configuration
    #[arg(long)]
    pub show: bool,

    /// Reset the configuration to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Execute the `config` command.
///
/// With no flags at all, behaves like `--show`.
pub fn execute(args: ConfigArgs, output: &OutputConfig) -> Result<()> {
    let mut settings = Settings::load()?;
    let no_changes = args.set_main.is_none() && args.set_active.is_none() && !args.reset;

    if let Some(main_path) = args.set_main {
        if !main_path.exists() {
            output::warning(
                output,
                &format!("File does not exist: {}", main_path.display()),
            );
            output::info(output, "It will be created when first used.");
        }
        output::success(
            output,
            &format!("Main document path set to: {}", main_path.display()),
        );
        settings.main_path = Some(main_path);
        settings.save()?;
    }

    if let Some(active_path) = args.set_active {
        if !active_path.exists() {
            output::warning(
                output,
                &format!("File does not exist: {}", active_path.display()),
            );
            output::info(output, "It will be created when first used.");
        }
        output::success(
            output,
            &format!("Active document path set to: {}", active_path.display()),
        );
        settings.active_path = Some(active_path);
        settings.save()?;
    }

    if args.reset {
        Settings::reset()?;
        output::success(output, "Configuration reset to defaults");
    }

    if args.show || no_changes {
        let settings = Settings::load()?;
        output::info(output, "Current configuration:");
        output::info(
            output,
            &format!(
                "Main document path: {}",
                settings
                    .main_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "Not set".to_string())
            ),
        );
        output::info(
            output,
            &format!(
                "Active document path: {}",
                settings
                    .active_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "Not set".to_string())
            ),
        );

        if let Some(path) = &settings.main_path {
            if !path.exists() {
                output::warning(
                    output,
                    &format!("Main document file does not exist: {}", path.display()),
                );
            }
        }
        if let Some(path) = &settings.active_path {
            if !path.exists() {
                output::warning(
                    output,
                    &format!("Active document file does not exist: {}", path.display()),
                );
            }
        }
    }

    Ok(())
}

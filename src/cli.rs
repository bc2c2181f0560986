//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use modeset::output::OutputConfig;

use crate::commands;

/// Modeset - Reconcile a YAML mode catalog with an active selection
#[derive(Parser, Debug)]
#[command(name = "modeset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add modes from the main document to the active document
    Add(commands::add::AddArgs),
    /// Remove modes from the active document
    Remove(commands::remove::RemoveArgs),
    /// Remove all modes from the active document
    RemoveAll(commands::remove_all::RemoveAllArgs),
    /// Remove all modes, then add the specified ones
    RemoveAllAndAdd(commands::remove_all_add::RemoveAllAndAddArgs),
    /// Manage persisted default document paths
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .format_timestamp(None)
        .init();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Add(args) => commands::add::execute(args, &output),
            Commands::Remove(args) => commands::remove::execute(args, &output),
            Commands::RemoveAll(args) => commands::remove_all::execute(args, &output),
            Commands::RemoveAllAndAdd(args) => commands::remove_all_add::execute(args, &output),
            Commands::Config(args) => commands::config::execute(args, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

//! # Persisted Settings
//!
//! A small key/value settings file holding the default main/active document
//! paths, so they need not be repeated on every invocation. Stored as YAML
//! in `~/.modeset/config.yaml`, or under `$MODESET_CONFIG_DIR` when that
//! variable is set (used by the test suites to isolate state).
//!
//! The reconciliation engine never reads settings; the command layer loads
//! them, applies flag-over-setting precedence, and passes explicit paths
//! down.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable overriding the settings directory.
pub const CONFIG_DIR_ENV: &str = "MODESET_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "config.yaml";

/// Persisted default paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Default path of the main document (the catalog).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_path: Option<PathBuf>,
    /// Default path of the active document (the selection).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings, returning defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        let path = config_file();
        if !path.exists() {
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Persist settings, creating the directory on first use.
    pub fn save(&self) -> Result<()> {
        let path = config_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Remove the settings file, restoring defaults.
    pub fn reset() -> Result<()> {
        let path = config_file();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

fn config_dir() -> PathBuf {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".modeset")
}

fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

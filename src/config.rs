//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/promptdata/promptdata.toml`
//! 3. Explicit config: `--config <path>`
//!
//! There is no environment variable layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::application::ApplicationError;

/// Unified configuration for promptdata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Colored terminal output (default: true)
    pub color: bool,
    /// Log level used when no `-d` flag is given (default: "warn")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            log_level: "warn".into(),
        }
    }
}

/// Get the XDG config directory for promptdata.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "promptdata").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("promptdata.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Expand `~` and `$VAR` in a user-supplied path.
fn expand_path(path: &Path) -> Result<PathBuf, ApplicationError> {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| ApplicationError::Config {
            message: format!("expand {}: {}", raw, e),
        })
}

impl Settings {
    /// Load settings: defaults, then the global file, then `explicit` if given.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), explicit)
    }

    /// Load settings from explicit layer paths.
    ///
    /// The global file is optional; an explicit file must exist.
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("color", defaults.color)
            .map_err(config_err)?
            .set_default("log_level", defaults.log_level)
            .map_err(config_err)?;

        if let Some(global) = global {
            builder = builder.add_source(File::from(global).required(false));
        }

        if let Some(explicit) = explicit {
            let path = expand_path(explicit)?;
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .build()
            .map_err(config_err)?
            .try_deserialize()
            .map_err(config_err)
    }

    /// Parsed `log_level`; unknown values fall back to WARN.
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::WARN)
    }
}

//! Configuration loading
//!
//! Reads `<config_dir>/typeahead/config.toml`. A missing file is not an error;
//! an unreadable or invalid file falls back to defaults and reports a warning
//! the host can surface.

mod types;

use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, Config, LookupConfig};

use crate::error::ConfigError;

/// Loaded configuration plus a warning when the file could not be used
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location of the configuration file
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("typeahead").join("config.toml"))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> ConfigResult {
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config file {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} ({})", e, path.display())),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// Configuration module for textstat
// This module handles loading and parsing configuration from ~/.config/textstat/config.toml

mod types;

pub use types::{Config, OutputConfig, SortOrder, StatsConfig};

use std::fs;
use std::path::PathBuf;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/textstat/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_from(get_config_path())
}

fn load_from(config_path: PathBuf) -> ConfigResult {
    log::debug!("loading config from {config_path:?}");

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("failed to read config file {config_path:?}: {e}");
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {e}")),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::error!("failed to parse config file {config_path:?}: {e}");
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {e}")),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/textstat/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("textstat")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

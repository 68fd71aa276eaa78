//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::{DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILE};
use super::types::Config;
use crate::error::{Result, ShortcutError};

/// Get the default config path (~/.purr-data/shortcuts.json)
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(DEFAULT_CONFIG_DIR)
        .join(DEFAULT_CONFIG_FILE)
}

/// Read and parse a config file, reporting every failure.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| ShortcutError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| ShortcutError::Config(format!("cannot parse {}: {}", path.display(), e)))
}

/// Load configuration from `path`.
///
/// Returns Config::default() if the file is missing or unusable.
#[instrument(name = "load_config")]
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match read_config(path) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
}

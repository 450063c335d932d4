use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::locale::EAST_AFRICA_OFFSET_MINUTES;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Currency used when none is given on the command line
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Display time zone, minutes east of UTC
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_error_message")]
    pub default_error_message: String,
}

fn default_currency() -> String {
    crate::helpers::DEFAULT_CURRENCY.to_string()
}

fn default_utc_offset_minutes() -> i32 {
    EAST_AFRICA_OFFSET_MINUTES
}

fn default_error_message() -> String {
    crate::helpers::DEFAULT_ERROR_MESSAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            utc_offset_minutes: default_utc_offset_minutes(),
            debug: false,
            default_error_message: default_error_message(),
        }
    }
}

impl Config {
    /// Parse a YAML config document
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes to unit, not an empty mapping
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load from the resolved config path, or defaults when none exists
    pub fn load_or_default(cli_path: Option<&str>) -> Result<Self> {
        match get_config_path(cli_path)? {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Determine the config file path with fallback logic
///
/// 1. `--config <path>` (must exist)
/// 2. `~/.config/bizsuite/config.yaml`
/// 3. `./config.yaml`
///
/// Returns `None` when no config file is present; every key has a default.
pub fn get_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("bizsuite").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

//! Configuration management for tsuml.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `tsuml.toml` file
//! 3. User config `~/.config/tsuml/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Translation settings.
    pub translate: TranslateConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./tsuml.toml` (project local)
    /// 2. `~/.config/tsuml/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(CONFIG_FILE_NAME).exists() {
            return Self::from_file(CONFIG_FILE_NAME);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration text without consulting the environment.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Path of the per-user config file, if the platform has a config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(USER_CONFIG_FILE))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var(ENV_MEMBER_ASSOCIATIONS) {
            self.translate.member_associations = parse_flag(&value).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "{} must be a boolean, got '{}'",
                    ENV_MEMBER_ASSOCIATIONS, value
                ))
            })?;
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Translation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Infer associations between entities from member types.
    pub member_associations: bool,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            member_associations: DEFAULT_MEMBER_ASSOCIATIONS,
        }
    }
}

impl TranslateConfig {
    /// Settings with member associations switched on.
    pub fn with_member_associations() -> Self {
        Self {
            member_associations: true,
        }
    }
}

//! Configuration management for pigpen.
//!
//! Settings are read from `config.toml` in the platform config directory
//! (`~/.config/pigpen/config.toml` on Linux). A missing file means defaults.

mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use settings::{TableSettings, UiSettings};

/// Name of the configuration file.
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The config directory could not be created.
    #[error("Failed to create config directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    /// The config file could not be read.
    #[error("Failed to read config file: {0}")]
    ReadError(#[source] std::io::Error),

    /// The config file could not be written.
    #[error("Failed to write config file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The config file is not valid TOML for this layout.
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A setting has an invalid value.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Table defaults.
    pub table: TableSettings,
    /// Terminal UI settings.
    pub ui: UiSettings,
}

impl Config {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("pigpen").join(CONFIG_FILE))
    }

    /// Load configuration from the default location.
    ///
    /// Returns defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file.
    ///
    /// Returns defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(ConfigError::WriteError)?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.table.validate()?;
        self.ui.validate()
    }
}

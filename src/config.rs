use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::i18n::Locale;

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "SENDFORM_API_URL";

/// Base URL used when neither the config file nor the environment sets one
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Errors that can occur while loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Message endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; requests go to `{base_url}/api/messages`
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Appearance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI language
    #[serde(default)]
    pub locale: Locale,
    /// Enable dark theme
    #[serde(default = "default_true")]
    pub dark_theme: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            dark_theme: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dirs = directories::ProjectDirs::from("com", "sendform", "Sendform")
            .ok_or(ConfigError::NoConfigDir)?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load the effective configuration: file (if any), then environment override
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_file()?;
        config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Load only what is stored on disk, ignoring the environment
    pub fn load_file() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.api.base_url = normalize_base_url(&config.api.base_url);
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Replace the base URL with a non-empty override
    pub fn apply_api_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!("API base URL overridden to {}", url.trim());
            self.api.base_url = normalize_base_url(&url);
        }
    }
}

/// Trim whitespace and trailing slashes
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

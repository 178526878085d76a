//! Configuration types.
//!
//! Configuration lives in a TOML file under the platform config directory
//! (`~/.config/adscout/config.toml` on Linux). A missing file yields the
//! defaults; a malformed file is an error the caller may downgrade to a
//! logged warning.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log filter directive, e.g. "adscout=debug". Overridden by RUST_LOG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,

    /// Window dimensions for the two panels.
    #[serde(default)]
    pub window: WindowConfig,

    /// Appearance settings.
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl AppConfig {
    /// Load configuration from the default path.
    ///
    /// A missing file is not an error; defaults are returned.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Err(ConfigError::NoConfigDir),
        }
    }

    /// Load configuration from an explicit path, defaulting when absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Window dimensions for the model selector and results panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Model selector width in pixels.
    #[serde(default = "default_selector_width")]
    pub selector_width: f32,

    /// Model selector height in pixels.
    #[serde(default = "default_selector_height")]
    pub selector_height: f32,

    /// Results panel width in pixels.
    #[serde(default = "default_results_width")]
    pub results_width: f32,

    /// Results panel height in pixels.
    #[serde(default = "default_results_height")]
    pub results_height: f32,
}

fn default_selector_width() -> f32 {
    300.0
}

fn default_selector_height() -> f32 {
    200.0
}

fn default_results_width() -> f32 {
    900.0
}

fn default_results_height() -> f32 {
    700.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            selector_width: default_selector_width(),
            selector_height: default_selector_height(),
            results_width: default_results_width(),
            results_height: default_results_height(),
        }
    }
}

/// Appearance configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Theme mode: "light", "dark", or "system"
    #[serde(default)]
    pub theme: ThemeMode,

    /// Accent hue in degrees (0-360).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_hue: Option<f32>,
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("adscout"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

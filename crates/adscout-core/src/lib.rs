//! Core types for the adscout search view.
//!
//! This crate contains shared data structures that are used across the
//! adscout crates:
//! - Advertisement records displayed by the results view
//! - Search-model descriptors for the model selector
//! - The key-press vocabulary forwarded to listeners
//! - Configuration types
//! - Error types

mod ad;
mod config;
mod error;
mod key;
mod model;

pub use ad::Advertisement;
pub use config::{
    config_dir, config_path, ensure_config_dir, AppConfig, AppearanceConfig, ThemeMode,
    WindowConfig,
};
pub use error::{BackendError, ConfigError, ViewError};
pub use key::KeyCode;
pub use model::ModelInfo;

//! Error types for the adscout search view.

use thiserror::Error;

/// View contract violations - surfaced to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// A required listener was not supplied to `add_listeners`.
    #[error("missing {0} listener")]
    MissingListener(&'static str),

    /// A results operation was invoked while the results panel is not the
    /// active view.
    #[error("results panel is not active")]
    ResultsNotActive,
}

/// Backend errors - surfaced to UI.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Search execution failed.
    #[error("search error: {0}")]
    Search(String),

    /// The requested model is unknown to the backend.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Channel communication error.
    #[error("channel error: {0}")]
    Channel(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

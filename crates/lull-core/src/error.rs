//! Error types for the Lull sleep tracker.

use thiserror::Error;

/// View-model errors - logged at the call site, never rendered.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The note store rejected or failed a save.
    #[error("Store error: {0}")]
    Store(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid accent color string.
    #[error("Invalid accent color: {0}")]
    InvalidColor(String),
}

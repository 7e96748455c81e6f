//! Typed configuration errors.
//!
//! The settings store deliberately fails with [`ConfigError::TypeMismatch`]
//! when a stored value exists but has the wrong type, instead of silently
//! coercing it.

use thiserror::Error;

/// Configuration and settings-store errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine platform config directory")]
    NoConfigDir,

    #[error("setting '{key}' has the wrong type (expected {expected})")]
    TypeMismatch { key: String, expected: &'static str },
}

//! Error types for the ambient layers (config and plan loading)
//!
//! The loader builders themselves never fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or a loader plan
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A file could not be read
    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML config file could not be parsed
    #[error("Failed to parse config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The JSON loader plan could not be parsed
    #[error("Failed to parse loader plan")]
    Plan(#[from] serde_json::Error),

    /// A config value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, LoaderError>;

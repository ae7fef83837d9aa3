//! Error types for configuration loading.
//!
//! This module defines all errors that can occur while resolving, reading and
//! parsing a configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No file exists at the resolved path.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read a configuration file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid YAML. `source` is the parser's own error.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The document parsed, but its top level is not a mapping.
    #[error("Expected a mapping at the top level of {path}, found {found}")]
    NotAMapping { path: PathBuf, found: &'static str },

    /// The document could not be decoded into the requested type.
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// Path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::NotFound { path }
            | ConfigError::FileRead { path, .. }
            | ConfigError::YamlParse { path, .. }
            | ConfigError::NotAMapping { path, .. }
            | ConfigError::Decode { path, .. } => path,
        }
    }
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

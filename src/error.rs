//! Error types for getenv-config
//!
//! Loading can fail in exactly two places: reading the file and
//! deserializing the substituted text. Both variants keep the underlying
//! cause reachable through `std::error::Error::source`.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error reading the file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error unmarshalling the file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// True when the file could not be read
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// True when the substituted text did not deserialize
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Result type alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

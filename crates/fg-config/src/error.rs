use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message)
    }

    /// Create a generator settings error
    #[track_caller]
    pub fn generator<S: Into<String>>(message: S) -> Self {
        Self::generic("Generator", message)
    }

    /// Create an output settings error
    #[track_caller]
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::generic("Output", message)
    }

    /// Create an admin settings error
    #[track_caller]
    pub fn admin<S: Into<String>>(message: S) -> Self {
        Self::generic("Admin", message)
    }

    /// Create a catalog settings error
    #[track_caller]
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::generic("Catalog", message)
    }

    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;

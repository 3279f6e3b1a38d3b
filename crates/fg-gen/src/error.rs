use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use fg_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Invalid generator settings: {message} {location}")]
    Settings {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize fixtures: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    /// Create a settings error
    #[track_caller]
    pub fn settings<S: Into<String>>(message: S) -> Self {
        GenError::Settings {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, GenError>;

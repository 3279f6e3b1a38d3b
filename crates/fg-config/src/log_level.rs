use std::ops::Deref;
use std::str::FromStr;

use log::{LevelFilter, ParseLevelError};
use serde::{Deserialize, Deserializer};

use crate::DEFAULT_LOG_LEVEL;

/// `log::LevelFilter` read from `[logging] level` or `FIXGEN_LOG_LEVEL`.
///
/// In TOML an unrecognised level falls back to the default; from the
/// environment it is ignored and the configured level stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer).unwrap_or_default();

        Ok(s.parse().unwrap_or_default())
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Case-insensitive: "off", "error", "warn", "info", "debug", "trace".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(LogLevel)
    }
}

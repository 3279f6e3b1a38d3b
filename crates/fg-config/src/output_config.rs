use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_OUTPUT_PATH, DEFAULT_OUTPUT_PRETTY,
    DEFAULT_OUTPUT_TEST_PATH,
};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Fixture destination for a normal run
    pub path: String,
    /// Fixture destination when the generator runs in test mode
    pub test_path: String,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_OUTPUT_PATH),
            test_path: String::from(DEFAULT_OUTPUT_TEST_PATH),
            pretty: DEFAULT_OUTPUT_PRETTY,
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::output("output.path cannot be empty"));
        }
        if self.test_path.trim().is_empty() {
            return Err(ConfigError::output("output.test_path cannot be empty"));
        }
        Ok(())
    }

    /// Destination for this run
    pub fn destination(&self, is_test_run: bool) -> PathBuf {
        if is_test_run {
            PathBuf::from(&self.test_path)
        } else {
            PathBuf::from(&self.path)
        }
    }
}

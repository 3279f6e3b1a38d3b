use crate::{ConfigError, ConfigErrorResult, DEFAULT_CATALOG_PATH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of `{"name", "description"}` objects
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::catalog("catalog.path cannot be empty"));
        }
        Ok(())
    }
}

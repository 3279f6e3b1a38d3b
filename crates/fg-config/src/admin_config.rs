use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME};

use serde::Deserialize;

/// Identity of the bootstrap admin that creates every other record
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub name: String,
    pub email: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_ADMIN_NAME),
            email: String::from(DEFAULT_ADMIN_EMAIL),
        }
    }
}

impl AdminConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::admin("admin.name cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(ConfigError::admin(format!(
                "admin.email must be an email address, got '{}'",
                self.email
            )));
        }
        Ok(())
    }
}

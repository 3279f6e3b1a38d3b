use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_USERS, DEFAULT_MIN_USERS, DEFAULT_NUM_ORGS,
    DEFAULT_UTC_OFFSET_MINUTES, MAX_MAX_USERS, MAX_UTC_OFFSET_MINUTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of organisations, taken from catalog entries 1..=num_orgs
    pub num_orgs: usize,
    /// Fewest users per organisation (inclusive)
    pub min_users: usize,
    /// Upper bound on users per organisation (exclusive)
    pub max_users: usize,
    /// Fixed RNG seed for reproducible output; random when unset
    pub seed: Option<u64>,
    /// Offset applied when localizing generated timestamps
    pub utc_offset_minutes: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_orgs: DEFAULT_NUM_ORGS,
            min_users: DEFAULT_MIN_USERS,
            max_users: DEFAULT_MAX_USERS,
            seed: None,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.num_orgs == 0 {
            return Err(ConfigError::generator("generator.num_orgs must be >= 1"));
        }

        if self.min_users == 0 {
            return Err(ConfigError::generator("generator.min_users must be >= 1"));
        }

        if self.min_users >= self.max_users || self.max_users > MAX_MAX_USERS {
            return Err(ConfigError::generator(format!(
                "generator.min_users must be below generator.max_users (max {}), got {}..{}",
                MAX_MAX_USERS, self.min_users, self.max_users
            )));
        }

        if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&self.utc_offset_minutes) {
            return Err(ConfigError::generator(format!(
                "generator.utc_offset_minutes must be within +/-{}, got {}",
                MAX_UTC_OFFSET_MINUTES, self.utc_offset_minutes
            )));
        }

        Ok(())
    }
}

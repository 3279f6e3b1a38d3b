mod admin_config;
mod catalog_config;
mod config;
mod error;
mod generator_config;
mod log_level;
mod logging_config;
mod output_config;

#[cfg(test)]
mod tests;

pub use admin_config::AdminConfig;
pub use catalog_config::CatalogConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use generator_config::GeneratorConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use output_config::OutputConfig;

const CONFIG_DIR_ENV: &str = "FIXGEN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".fixgen";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_NUM_ORGS: usize = 20;
pub const DEFAULT_MIN_USERS: usize = 1;
pub const DEFAULT_MAX_USERS: usize = 10;
const MAX_MAX_USERS: usize = 1000;
// Europe/London outside daylight saving
const DEFAULT_UTC_OFFSET_MINUTES: i32 = 0;
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

const DEFAULT_CATALOG_PATH: &str = "scripts/orgs.json";

const DEFAULT_OUTPUT_PATH: &str = "core/tests/generated_data.json";
const DEFAULT_OUTPUT_TEST_PATH: &str = "scripts/tests/generated_test_data.json";
const DEFAULT_OUTPUT_PRETTY: bool = false;

pub const DEFAULT_ADMIN_NAME: &str = "Admin User";
pub const DEFAULT_ADMIN_EMAIL: &str = "AdminUser@geneticsinc.com";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

use crate::{
    AdminConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, CatalogConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, GeneratorConfig, LoggingConfig, OutputConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FIXGEN_CONFIG_DIR env var, else use ./.fixgen/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply FIXGEN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FIXGEN_CONFIG_DIR env var > ./.fixgen/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors before generating anything.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.generator.validate()?;
        self.catalog.validate()?;
        self.output.validate()?;
        self.admin.validate()?;

        Ok(())
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  generator: orgs={}, users/org={}..{}, seed={}, utc_offset={}m",
            self.generator.num_orgs,
            self.generator.min_users,
            self.generator.max_users,
            self.generator
                .seed
                .map_or_else(|| String::from("random"), |seed| seed.to_string()),
            self.generator.utc_offset_minutes
        );
        info!("  catalog: {}", self.catalog.path);
        info!(
            "  output: {} (test: {}, pretty: {})",
            self.output.path, self.output.test_path, self.output.pretty
        );
        info!("  admin: {} <{}>", self.admin.name, self.admin.email);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Generator
        Self::apply_env_parse("FIXGEN_NUM_ORGS", &mut self.generator.num_orgs);
        Self::apply_env_parse("FIXGEN_MIN_USERS", &mut self.generator.min_users);
        Self::apply_env_parse("FIXGEN_MAX_USERS", &mut self.generator.max_users);
        Self::apply_env_option_parse("FIXGEN_SEED", &mut self.generator.seed);
        Self::apply_env_parse(
            "FIXGEN_UTC_OFFSET_MINUTES",
            &mut self.generator.utc_offset_minutes,
        );

        // Catalog
        Self::apply_env_string("FIXGEN_CATALOG_PATH", &mut self.catalog.path);

        // Output
        Self::apply_env_string("FIXGEN_OUTPUT_PATH", &mut self.output.path);
        Self::apply_env_string("FIXGEN_OUTPUT_TEST_PATH", &mut self.output.test_path);
        Self::apply_env_bool("FIXGEN_OUTPUT_PRETTY", &mut self.output.pretty);

        // Admin
        Self::apply_env_string("FIXGEN_ADMIN_NAME", &mut self.admin.name);
        Self::apply_env_string("FIXGEN_ADMIN_EMAIL", &mut self.admin.email);

        // Logging
        Self::apply_env_parse("FIXGEN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FIXGEN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FIXGEN_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<T> parseable values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

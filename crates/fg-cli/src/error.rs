use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] fg_config::ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] fg_core::CoreError),

    #[error("Generation error: {0}")]
    Generate(#[from] fg_gen::GenError),

    #[error("Failed to create log directory {path}: {source}")]
    LogDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;

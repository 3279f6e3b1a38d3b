use crate::{CliError, CliErrorResult};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored levels (ignored when logging to file)
pub fn initialize(
    log_level: fg_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let level_filter = log_level.0;

    let output = match log_file {
        Some(ref log_path) => {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| CliError::LogDir {
                    path: parent.display().to_string(),
                    source: e,
                })?;
            }

            let file = fern::log_file(log_path).map_err(|e| CliError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;
            formatted(None).chain(file)
        }
        None => formatted(colored.then(level_colors)).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

/// `[<rfc3339> - <LEVEL>] <message>` for every destination.
fn formatted(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        out.finish(format_args!(
            "[{date} - {level}] {message}",
            date = humantime::format_rfc3339(SystemTime::now()),
            level = level_label(colors, record.level()),
        ))
    })
}

pub(crate) fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

pub(crate) fn level_label(colors: Option<ColoredLevelConfig>, level: Level) -> String {
    match colors {
        Some(colors) => colors.color(level).to_string(),
        None => level.to_string(),
    }
}

//! fixgen - fixture generator
//!
//! Writes a loader-compatible JSON array of one admin user, organisations
//! from the catalog, and a handful of users per organisation.
//!
//! # Examples
//!
//! ```bash
//! # Normal run: core/tests/generated_data.json
//! fixgen
//!
//! # Test run: scripts/tests/generated_test_data.json
//! fixgen test
//!
//! # Reproducible, five organisations, readable output
//! fixgen --orgs 5 --seed 42 --pretty
//! ```

use fg_cli::{Cli, CliErrorResult, generate_fixtures, logger};
use fg_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliErrorResult<()> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting fixgen v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let destination = cli.destination(&config);
    if cli.is_test_run() {
        info!("Test run: writing to {}", destination.display());
    }

    let written = generate_fixtures(&config, &destination)?;
    info!("Done: {} fixtures in {}", written, destination.display());

    Ok(())
}

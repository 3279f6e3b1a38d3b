//! fg-cli library
//!
//! Argument parsing, logging setup and the generate-and-write pipeline
//! behind the `fixgen` binary.

pub mod cli;
pub mod error;
pub mod logger;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, Result as CliErrorResult};
pub use pipeline::{generate_fixtures, generate_fixtures_as_of, generator_settings};

/// Positional argument that switches output to the test fixture path
pub const TEST_MODE_ARG: &str = "test";

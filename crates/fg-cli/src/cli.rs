use crate::TEST_MODE_ARG;

use fg_config::Config;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fixgen")]
#[command(about = "Generate loader fixtures of organisations and their users")]
#[command(version)]
pub struct Cli {
    /// Pass `test` to write to the test fixture path instead of the normal one
    #[arg(value_name = "MODE")]
    pub mode: Vec<String>,

    /// Number of organisations to generate (overrides generator.num_orgs)
    #[arg(long)]
    pub orgs: Option<usize>,

    /// RNG seed for reproducible output (overrides generator.seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Organisation catalog JSON file (overrides catalog.path)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Write fixtures here instead of the configured destination
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn is_test_run(&self) -> bool {
        self.mode.iter().any(|arg| arg == TEST_MODE_ARG)
    }

    /// Flags win over config file and environment.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(orgs) = self.orgs {
            config.generator.num_orgs = orgs;
        }
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if let Some(ref catalog) = self.catalog {
            config.catalog.path = catalog.clone();
        }
        if self.pretty {
            config.output.pretty = true;
        }
    }

    pub fn destination(&self, config: &Config) -> PathBuf {
        match self.output {
            Some(ref path) => path.clone(),
            None => config.output.destination(self.is_test_run()),
        }
    }
}

use crate::CliErrorResult;

use fg_config::Config;
use fg_core::OrgCatalog;
use fg_gen::{AdminIdentity, Generator, GeneratorSettings, seeded_rng, utc_offset, write_fixtures};

use std::path::Path;

use chrono::{Local, NaiveDate};
use log::info;

/// Convert config types for fg-gen
pub fn generator_settings(config: &Config) -> CliErrorResult<GeneratorSettings> {
    Ok(GeneratorSettings {
        num_orgs: config.generator.num_orgs,
        users_per_org: config.generator.min_users..config.generator.max_users,
        utc_offset: utc_offset(config.generator.utc_offset_minutes)?,
        admin: AdminIdentity {
            name: config.admin.name.clone(),
            email: config.admin.email.clone(),
        },
    })
}

/// Load the catalog, generate one run of records and write them to `destination`.
/// Returns the number of fixtures written.
pub fn generate_fixtures(config: &Config, destination: &Path) -> CliErrorResult<usize> {
    generate_fixtures_as_of(config, destination, Local::now().date_naive())
}

/// Same as [`generate_fixtures`], with timestamps placed in the year before `today`.
pub fn generate_fixtures_as_of(
    config: &Config,
    destination: &Path,
    today: NaiveDate,
) -> CliErrorResult<usize> {
    let catalog = OrgCatalog::load(&config.catalog.path)?;
    info!(
        "Loaded {} organisations from {}",
        catalog.len(),
        config.catalog.path
    );

    let settings = generator_settings(config)?;
    let rng = seeded_rng(config.generator.seed);
    let records = Generator::new(&catalog, settings, rng)
        .with_today(today)
        .generate()?;

    write_fixtures(destination, &records, config.output.pretty)?;

    Ok(records.len())
}

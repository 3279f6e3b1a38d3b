use crate::Cli;

use fg_config::Config;

use std::path::PathBuf;

use clap::Parser;

#[test]
fn test_no_args_is_normal_run() {
    let cli = Cli::try_parse_from(["fixgen"]).unwrap();

    assert!(!cli.is_test_run());
    assert_eq!(
        cli.destination(&Config::default()),
        PathBuf::from("core/tests/generated_data.json")
    );
}

#[test]
fn test_literal_test_arg_selects_test_destination() {
    let cli = Cli::try_parse_from(["fixgen", "test"]).unwrap();

    assert!(cli.is_test_run());
    assert_eq!(
        cli.destination(&Config::default()),
        PathBuf::from("scripts/tests/generated_test_data.json")
    );
}

#[test]
fn test_test_arg_found_among_other_positionals() {
    let cli = Cli::try_parse_from(["fixgen", "scripts/data_generator", "test"]).unwrap();

    assert!(cli.is_test_run());
}

#[test]
fn test_similar_arg_is_not_test_mode() {
    let cli = Cli::try_parse_from(["fixgen", "testing"]).unwrap();

    assert!(!cli.is_test_run());
}

#[test]
fn test_output_flag_wins_over_mode() {
    let cli = Cli::try_parse_from(["fixgen", "test", "--output", "out/fixtures.json"]).unwrap();

    assert_eq!(
        cli.destination(&Config::default()),
        PathBuf::from("out/fixtures.json")
    );
}

#[test]
fn test_flags_override_config() {
    let cli = Cli::try_parse_from([
        "fixgen",
        "--orgs",
        "5",
        "--seed",
        "42",
        "--catalog",
        "data/orgs.json",
        "--pretty",
    ])
    .unwrap();
    let mut config = Config::default();

    cli.apply_overrides(&mut config);

    assert_eq!(config.generator.num_orgs, 5);
    assert_eq!(config.generator.seed, Some(42));
    assert_eq!(config.catalog.path, "data/orgs.json");
    assert!(config.output.pretty);
}

#[test]
fn test_absent_flags_leave_config_untouched() {
    let cli = Cli::try_parse_from(["fixgen"]).unwrap();
    let mut config = Config::default();
    config.generator.seed = Some(9);

    cli.apply_overrides(&mut config);

    assert_eq!(config.generator.num_orgs, 20);
    assert_eq!(config.generator.seed, Some(9));
    assert!(!config.output.pretty);
}

#[test]
fn test_non_numeric_orgs_is_rejected() {
    assert!(Cli::try_parse_from(["fixgen", "--orgs", "many"]).is_err());
}

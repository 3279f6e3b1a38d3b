use crate::OutputConfig;

use std::path::PathBuf;

use googletest::assert_that;
use googletest::prelude::{anything, err};

#[test]
fn given_normal_run_when_destination_then_output_path() {
    let config = OutputConfig::default();

    assert_eq!(
        config.destination(false),
        PathBuf::from("core/tests/generated_data.json")
    );
}

#[test]
fn given_test_run_when_destination_then_test_path() {
    let config = OutputConfig::default();

    assert_eq!(
        config.destination(true),
        PathBuf::from("scripts/tests/generated_test_data.json")
    );
}

#[test]
fn given_empty_test_path_when_validate_then_error() {
    let config = OutputConfig {
        test_path: String::new(),
        ..OutputConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

use crate::tests::{fixed_today, test_catalog};
use crate::{Generator, GeneratorSettings, to_json, write_fixtures};

use googletest::assert_that;
use googletest::prelude::{anything, ok};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

fn generate(num_orgs: usize, seed: u64) -> Vec<fg_core::FixtureRecord> {
    let catalog = test_catalog(num_orgs);
    let settings = GeneratorSettings {
        num_orgs,
        ..GeneratorSettings::default()
    };
    Generator::new(&catalog, settings, StdRng::seed_from_u64(seed))
        .with_today(fixed_today())
        .generate()
        .unwrap()
}

#[test]
fn given_records_when_serialized_then_every_element_is_a_fixture_object() {
    // Given
    let records = generate(3, 11);
    let users = records.iter().filter(|r| r.model() == "core.User").count() - 1;

    // When
    let json = to_json(&records, false).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();

    // Then
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 3 + 1 + users);
    for item in array {
        assert!(item["model"].is_string());
        assert!(item["pk"].is_i64());
        assert!(item["fields"].is_object(), "fields must be nested: {item}");
    }
}

#[test]
fn given_records_when_serialized_then_no_escaped_payloads() {
    let records = generate(2, 5);

    let json = to_json(&records, false).unwrap();

    assert!(!json.contains("\"{"));
    assert!(!json.contains("\\\""));
}

#[test]
fn given_pretty_flag_when_serialized_then_same_value() {
    let records = generate(2, 5);

    let compact: Value = serde_json::from_str(&to_json(&records, false).unwrap()).unwrap();
    let pretty_text = to_json(&records, true).unwrap();
    let pretty: Value = serde_json::from_str(&pretty_text).unwrap();

    assert!(pretty_text.contains('\n'));
    assert_eq!(compact, pretty);
}

#[test]
fn given_nested_destination_when_write_fixtures_then_creates_parents() {
    // Given
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scripts").join("tests").join("generated.json");
    let records = generate(1, 8);

    // When
    let result = write_fixtures(&path, &records, false);

    // Then
    assert_that!(result, ok(anything()));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_json(&records, false).unwrap());
}

#[test]
fn given_destination_is_a_directory_when_write_fixtures_then_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let records = generate(1, 8);

    let result = write_fixtures(dir.path(), &records, false);

    assert!(matches!(result, Err(crate::GenError::Io { .. })));
}

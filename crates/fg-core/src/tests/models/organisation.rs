use crate::Organisation;

use chrono::{FixedOffset, TimeZone};

#[test]
fn test_organisation_new() {
    let created_at = FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2025, 7, 4, 8, 30, 0)
        .unwrap();

    let organisation = Organisation::new(
        2,
        "Beta".to_string(),
        "Always in testing.".to_string(),
        created_at,
        1,
        false,
        true,
    );

    assert_eq!(organisation.id, 2);
    assert_eq!(organisation.updated_at, created_at);
    assert_eq!(organisation.created_by, 1);
    assert_eq!(organisation.updated_by, 1);
    assert!(!organisation.has_consented_to_share);
    assert!(organisation.has_consented_to_store);
    assert_eq!(organisation.to_string(), "Beta(2)");
}

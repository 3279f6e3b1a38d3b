use crate::User;

use chrono::{FixedOffset, TimeZone};

#[test]
fn test_user_new_derives_fields() {
    let created_at = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .unwrap();

    let user = User::new(
        7,
        "Jane Smith".to_string(),
        "janesmith@genomap.com".to_string(),
        created_at,
        1,
        Some(3),
    );

    assert_eq!(user.id, 7);
    assert_eq!(user.username, "janesmith@genomap.com");
    assert_eq!(user.display_name, "Jane Smith");
    assert_eq!(user.updated_at, user.created_at);
    assert_eq!(user.updated_by, 1);
    assert_eq!(user.organisation_id, Some(3));
}

#[test]
fn test_admin_user_displays_name_and_id() {
    let created_at = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .unwrap();

    let admin = User::new(
        1,
        "Admin User".to_string(),
        "AdminUser@geneticsinc.com".to_string(),
        created_at,
        1,
        None,
    );

    assert_eq!(admin.created_by, admin.id);
    assert_eq!(admin.to_string(), "Admin User(1)");
}

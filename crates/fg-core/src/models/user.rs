//! User entity - a person, optionally belonging to one organisation.

use crate::fixture::fixture_datetime;
use crate::{FixtureModel, USER_MODEL};

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A user as the loader expects it.
/// `id` becomes the fixture `pk`, so it is left out of the serialized fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Mirrors `email`; the loader authenticates by email
    pub username: String,
    pub display_name: String,
    #[serde(serialize_with = "fixture_datetime::serialize")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(serialize_with = "fixture_datetime::serialize")]
    pub updated_at: DateTime<FixedOffset>,
    pub created_by: i64,
    pub organisation_id: Option<i64>,
    pub updated_by: i64,
}

impl User {
    /// Create a user, deriving username, display name and the `updated_*` fields
    pub fn new(
        id: i64,
        name: String,
        email: String,
        created_at: DateTime<FixedOffset>,
        created_by: i64,
        organisation_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            display_name: name.clone(),
            name,
            username: email.clone(),
            email,
            created_at,
            updated_at: created_at,
            created_by,
            organisation_id,
            updated_by: created_by,
        }
    }
}

impl FixtureModel for User {
    const MODEL: &'static str = USER_MODEL;

    fn pk(&self) -> i64 {
        self.id
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}

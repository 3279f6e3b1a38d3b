//! Organisation entity - owns users, sourced from the org catalog.

use crate::fixture::fixture_datetime;
use crate::{FixtureModel, ORGANISATION_MODEL};

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organisation {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "fixture_datetime::serialize")]
    pub created_at: DateTime<FixedOffset>,
    pub created_by: i64,
    #[serde(serialize_with = "fixture_datetime::serialize")]
    pub updated_at: DateTime<FixedOffset>,
    pub updated_by: i64,
    pub has_consented_to_share: bool,
    pub has_consented_to_store: bool,
}

impl Organisation {
    /// Create an organisation; `updated_*` start out equal to `created_*`
    pub fn new(
        id: i64,
        name: String,
        description: String,
        created_at: DateTime<FixedOffset>,
        created_by: i64,
        has_consented_to_share: bool,
        has_consented_to_store: bool,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
            created_by,
            updated_at: created_at,
            updated_by: created_by,
            has_consented_to_share,
            has_consented_to_store,
        }
    }
}

impl FixtureModel for Organisation {
    const MODEL: &'static str = ORGANISATION_MODEL;

    fn pk(&self) -> i64 {
        self.id
    }
}

impl std::fmt::Display for Organisation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}

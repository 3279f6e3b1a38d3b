use crate::{Fixture, Organisation, User};

use serde::Serialize;

/// One element of the fixture array.
/// Untagged: each variant serializes as its bare `{model, pk, fields}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FixtureRecord {
    User(Fixture<User>),
    Organisation(Fixture<Organisation>),
}

impl FixtureRecord {
    pub fn model(&self) -> &'static str {
        match self {
            Self::User(fixture) => fixture.model,
            Self::Organisation(fixture) => fixture.model,
        }
    }

    pub fn pk(&self) -> i64 {
        match self {
            Self::User(fixture) => fixture.pk,
            Self::Organisation(fixture) => fixture.pk,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(fixture) => Some(&fixture.fields),
            Self::Organisation(_) => None,
        }
    }

    pub fn as_organisation(&self) -> Option<&Organisation> {
        match self {
            Self::Organisation(fixture) => Some(&fixture.fields),
            Self::User(_) => None,
        }
    }
}

impl From<&User> for FixtureRecord {
    fn from(user: &User) -> Self {
        Self::User(Fixture::render(user))
    }
}

impl From<&Organisation> for FixtureRecord {
    fn from(organisation: &Organisation) -> Self {
        Self::Organisation(Fixture::render(organisation))
    }
}

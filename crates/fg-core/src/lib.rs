pub mod catalog;
pub mod error;
pub mod fixture;
pub mod models;

#[cfg(test)]
mod tests;

pub use catalog::org_catalog::OrgCatalog;
pub use catalog::org_entry::OrgEntry;
pub use error::{CoreError, Result};
pub use fixture::fixture::Fixture;
pub use fixture::fixture_model::FixtureModel;
pub use fixture::fixture_record::FixtureRecord;
pub use models::organisation::Organisation;
pub use models::user::User;

/// Model tag the loader uses for users.
pub const USER_MODEL: &str = "core.User";
/// Model tag the loader uses for organisations.
pub const ORGANISATION_MODEL: &str = "core.Organisation";

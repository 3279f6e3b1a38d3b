//! fg-gen - builds the fixture graph and writes it out.
//!
//! One bootstrap admin, then organisations from the catalog, each followed
//! by a random number of users. Everything is created by the admin.

pub mod email;
pub mod error;
pub mod generator;
pub mod names;
pub mod serializer;
pub mod timestamps;

#[cfg(test)]
mod tests;

pub use email::{EmailRegistry, strip_apostrophes, synthesize_email};
pub use error::{GenError, Result as GenErrorResult};
pub use generator::{AdminIdentity, Generator, GeneratorSettings, seeded_rng};
pub use names::NameProvider;
pub use serializer::{to_json, write_fixtures};
pub use timestamps::{localize, past_year_datetime, utc_offset};

/// Primary key of the bootstrap admin
pub const ADMIN_USER_ID: i64 = 1;
/// Width of the window generated timestamps fall in, ending today
pub const PAST_YEAR_DAYS: u64 = 365;

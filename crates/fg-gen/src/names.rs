//! Fake person names from the `fake` crate's English name data.

use fake::Fake;
use fake::faker::name::en::{Name, NameWithTitle};
use rand::Rng;

/// One name in this many gets a title ("Dr. Jane Smith").
const TITLE_ONE_IN: u32 = 10;

/// Draws every name from the caller's RNG, so a seeded run repeats exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameProvider;

impl NameProvider {
    /// "First Last", occasionally prefixed with a title.
    /// May contain apostrophes ("O'Reilly"); callers strip them where they matter.
    pub fn full_name<R: Rng>(&self, rng: &mut R) -> String {
        if rng.random_ratio(1, TITLE_ONE_IN) {
            NameWithTitle().fake_with_rng(rng)
        } else {
            Name().fake_with_rng(rng)
        }
    }
}

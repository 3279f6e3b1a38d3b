use serde::Serialize;

/// An entity that can be rendered as a loader fixture.
///
/// The entity's serialized form is the fixture's `fields` payload, so
/// implementors must leave their own id out of it.
pub trait FixtureModel: Serialize {
    /// Logical type tag, e.g. `core.User`
    const MODEL: &'static str;

    /// Primary key of this entity
    fn pk(&self) -> i64;
}

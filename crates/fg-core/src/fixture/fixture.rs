//! Loader fixture container: `{"model": .., "pk": .., "fields": {..}}`.

use crate::FixtureModel;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture<T> {
    pub model: &'static str,
    pub pk: i64,
    pub fields: T,
}

impl<T> Fixture<T>
where
    T: FixtureModel + Clone,
{
    /// Wrap an entity with its model tag and primary key
    pub fn render(entity: &T) -> Self {
        Self {
            model: T::MODEL,
            pk: entity.pk(),
            fields: entity.clone(),
        }
    }
}

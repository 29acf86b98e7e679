//! Entity trait: identity of a record within its list.

/// Entity marker + minimal interface.
///
/// Record lists must not contain two entities with the same id; the store
/// enforces this at ingestion.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Return the first id that occurs more than once, in list order.
pub fn first_duplicate_id<T: Entity>(records: &[T]) -> Option<&T::Id> {
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    records.iter().map(Entity::id).find(|id| !seen.insert(*id))
}

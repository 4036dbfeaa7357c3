//! Entity trait: identity that survives across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with equal ids are the same entity, whatever their fields say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// True when both values denote the same entity.
    fn same_entity<O: Entity<Id = Self::Id> + ?Sized>(&self, other: &O) -> bool {
        self.id() == other.id()
    }
}

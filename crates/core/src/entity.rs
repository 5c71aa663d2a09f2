//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Items and customers are entities: two values with the same id are the
/// same record, whatever their attributes currently say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

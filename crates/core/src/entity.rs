//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The key is not required to be unique within a collection; callers that
/// match on it decide whether to act on the first or on every match.
pub trait Entity {
    /// Identifying key of the entity.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity key.
    fn id(&self) -> &Self::Id;
}

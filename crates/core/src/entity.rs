//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identifiers in this domain are small `Copy` integers, so the trait hands
/// them out by value rather than by reference.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

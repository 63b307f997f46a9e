//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// An entity is defined by its identifier, not its attribute values: two
/// orders with the same products are still different orders.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

//! Entity trait: identity that survives attribute comparisons.

/// Entity marker + minimal interface.
///
/// Catalog products are entities keyed by name: two products with the same
/// name are the same product, whatever their other attributes say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

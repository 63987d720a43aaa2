//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are compared by **identity**, not by attribute values: two
/// instances represent the same entity exactly when their identifiers compare
/// equal, however much the rest of their state differs. This is deliberately
/// separate from the structural equality of
/// [`ValueObject`](crate::value_object::ValueObject) - overloading a single
/// equality operator for both notions invites subtle bugs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison: same entity iff the identifiers compare equal.
    ///
    /// Comparison across entity kinds is ruled out statically (`other` must
    /// be the same type), so this never has to answer "is a cargo the same
    /// entity as an invoice".
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

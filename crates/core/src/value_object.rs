//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `TrackingId("ABC123")` is a value object: any two instances carrying the
///   same canonical value are interchangeable.
/// - `Cargo { tracking_id, .. }` is an entity: its attributes change over its
///   lifetime while it remains the same cargo.
///
/// ## Immutability
///
/// Value objects should be **immutable** - once created, they don't change. To "modify"
/// a value object, create a new one with the new values. This ensures:
/// - **Thread safety**: Immutable objects are safe to share across threads
/// - **Predictability**: Value objects can't be unexpectedly modified
/// - **Value semantics**: Values behave like primitives (can be copied, compared)
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: Value objects should be cheap to copy (they're values, not references)
/// - **PartialEq**: Value objects are compared by their attribute values
/// - **Debug**: Value objects should be debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Structural (value) comparison.
    ///
    /// This is the value-object counterpart of [`Entity::same_identity_as`]:
    /// two value objects are "the same" exactly when all their attributes
    /// match. Never fails.
    ///
    /// [`Entity::same_identity_as`]: crate::entity::Entity::same_identity_as
    fn same_value_as(&self, other: &Self) -> bool {
        self == other
    }
}

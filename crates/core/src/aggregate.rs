//! Aggregate root trait for domain models with external transaction boundaries.

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the entity guarding the consistency boundary of its
/// aggregate; identifier and identity comparison come from [`Entity`]. This
/// is intentionally small so domain modules can decide how they model state
/// transitions (direct mutators, pure functions, etc.) without bringing in
/// any infrastructure concerns.
pub trait AggregateRoot: Entity {
    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped once per state-changing operation. Workflows that might touch
    /// the same aggregate concurrently key their optimistic checks on this.
    fn version(&self) -> u64;
}

/// Optimistic concurrency expectation for an aggregate.
///
/// The domain model itself performs no locking; a workflow that re-routes a
/// cargo while another re-specifies it must impose its own transaction
/// boundary, typically by checking the version it last read against the
/// version it is about to overwrite.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Skip version checking (useful for idempotent commands, migrations, etc.).
    Any,
    /// Require the aggregate to be at an exact version.
    Exact(u64),
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }

    pub fn check(self, actual: u64) -> DomainResult<()> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(DomainError::conflict(format!(
                "optimistic concurrency check failed (expected: {self:?}, actual: {actual})"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_expectation_matches_every_version() {
        assert!(ExpectedVersion::Any.matches(0));
        assert!(ExpectedVersion::Any.matches(42));
        assert!(ExpectedVersion::Any.check(7).is_ok());
    }

    #[test]
    fn exact_expectation_only_matches_its_version() {
        assert!(ExpectedVersion::Exact(3).matches(3));
        assert!(!ExpectedVersion::Exact(3).matches(4));
    }

    #[test]
    fn failed_check_is_a_conflict() {
        let err = ExpectedVersion::Exact(1).check(2).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}

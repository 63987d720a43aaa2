//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
///
/// Every variant is raised synchronously at the point of invalid construction
/// (or version check); there is no recovery path inside the domain layer, and
/// a failed construction leaves no partial state behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A tracking identifier was malformed (e.g. blank, embedded whitespace).
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A route specification was structurally invalid (e.g. origin equals
    /// destination).
    #[error("invalid specification: {0}")]
    InvalidSpecification(String),

    /// A constructor argument was invalid (e.g. blank location name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A conflict occurred (e.g. stale version / optimistic concurrency).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    pub fn invalid_specification(msg: impl Into<String>) -> Self {
        Self::InvalidSpecification(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

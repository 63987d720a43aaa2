use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use freightline_core::{DomainError, DomainResult, ValueObject};

/// Unique identifier of a booked cargo.
///
/// Opaque to the domain: booking references may be human-entered ("T1",
/// "ABC123") or generated. The canonical form is trimmed and ASCII-uppercased,
/// so `t1` and `T1` name the same cargo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

impl TrackingId {
    /// Generate a fresh tracking id.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing ids explicitly in tests for
    /// determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string().to_ascii_uppercase())
    }

    /// Parse a tracking id from its string form, canonicalizing it.
    ///
    /// Well-formedness policy: the value must be non-blank and must contain
    /// no whitespace or control characters.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_identifier(
                "tracking id cannot be blank",
            ));
        }
        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::invalid_identifier(format!(
                "tracking id cannot contain whitespace or control characters: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TrackingId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for TrackingId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TrackingId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ValueObject for TrackingId {}

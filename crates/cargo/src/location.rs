use serde::{Deserialize, Serialize};

use freightline_core::{DomainError, DomainResult, ValueObject};

/// A named location a cargo can be loaded at or unloaded at.
///
/// Freightline treats locations as opaque names supplied by the booking
/// workflow ("NYC", "HONOLULU", a UN/LOCODE, ...); the canonical form is the
/// trimmed name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_argument(
                "location name cannot be blank",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for Location {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let err = Location::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn name_is_trimmed_to_canonical_form() {
        let loc = Location::new("  NYC ").unwrap();
        assert_eq!(loc.name(), "NYC");
        assert!(loc.same_value_as(&Location::new("NYC").unwrap()));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use freightline_core::{DomainError, DomainResult, ValueObject};

use crate::itinerary::Itinerary;
use crate::location::Location;

/// The route a customer requires for a cargo: where it must travel from,
/// where it must arrive, and by when.
///
/// Replaced wholesale when requirements change; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpecification {
    origin: Location,
    destination: Location,
    arrival_deadline: DateTime<Utc>,
}

impl RouteSpecification {
    /// A specification whose origin equals its destination describes no
    /// journey and is rejected. A deadline in the past is accepted: the
    /// persistence layer reconstructs historical specifications verbatim and
    /// must not re-run wall-clock checks.
    pub fn new(
        origin: Location,
        destination: Location,
        arrival_deadline: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if origin == destination {
            return Err(DomainError::invalid_specification(format!(
                "origin and destination must differ: {origin}"
            )));
        }
        Ok(Self {
            origin,
            destination,
            arrival_deadline,
        })
    }

    pub fn origin(&self) -> &Location {
        &self.origin
    }

    pub fn destination(&self) -> &Location {
        &self.destination
    }

    pub fn arrival_deadline(&self) -> DateTime<Utc> {
        self.arrival_deadline
    }

    /// Whether the given itinerary would meet this specification: it must be
    /// routed, start by loading at the origin, and end by unloading at the
    /// destination.
    ///
    /// The routing workflow checks this *before* assigning an itinerary to a
    /// cargo; the aggregate itself accepts any itinerary.
    pub fn is_satisfied_by(&self, itinerary: &Itinerary) -> bool {
        itinerary.first_load_location() == Some(&self.origin)
            && itinerary.last_unload_location() == Some(&self.destination)
    }
}

impl ValueObject for RouteSpecification {}

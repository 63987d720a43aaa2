use serde::{Deserialize, Serialize};

use freightline_core::{AggregateRoot, Entity};

use crate::itinerary::Itinerary;
use crate::location::Location;
use crate::route_specification::RouteSpecification;
use crate::tracking_id::TrackingId;

/// Aggregate root: a booked cargo.
///
/// A cargo is identified by its tracking id for its entire life. Its origin is
/// copied from the *initial* route specification at booking time and never
/// changes afterwards, no matter how often the cargo is re-routed. The current
/// route specification and itinerary are value objects replaced wholesale by
/// the booking and routing workflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cargo {
    tracking_id: TrackingId,
    origin: Location,
    route_specification: RouteSpecification,
    itinerary: Itinerary,
    version: u64,
}

impl Cargo {
    /// Book a new cargo against a route specification.
    ///
    /// Fixes the tracking id and the origin for the life of the aggregate;
    /// the itinerary starts empty (unrouted).
    pub fn book(tracking_id: TrackingId, route_specification: RouteSpecification) -> Self {
        let origin = route_specification.origin().clone();
        tracing::debug!(
            tracking_id = %tracking_id,
            origin = %origin,
            destination = %route_specification.destination(),
            "cargo booked"
        );
        Self {
            tracking_id,
            origin,
            route_specification,
            itinerary: Itinerary::empty(),
            version: 0,
        }
    }

    /// Reconstruct a cargo from persisted attributes.
    ///
    /// The stored origin is restored verbatim - it is *not* re-derived from
    /// the route specification, which may have been replaced since booking.
    /// A row without a routing yields the empty itinerary.
    pub fn restore(
        tracking_id: TrackingId,
        origin: Location,
        route_specification: RouteSpecification,
        itinerary: Option<Itinerary>,
        version: u64,
    ) -> Self {
        Self {
            tracking_id,
            origin,
            route_specification,
            itinerary: itinerary.unwrap_or_else(Itinerary::empty),
            version,
        }
    }

    pub fn tracking_id(&self) -> &TrackingId {
        &self.tracking_id
    }

    pub fn origin(&self) -> &Location {
        &self.origin
    }

    pub fn route_specification(&self) -> &RouteSpecification {
        &self.route_specification
    }

    /// The current itinerary. A never-routed cargo yields the empty
    /// itinerary; callers never have to special-case absence.
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Replace the current route specification unconditionally.
    ///
    /// The existing itinerary is left untouched and may no longer satisfy the
    /// new specification; it stays stale until the routing workflow assigns a
    /// replacement. That inconsistency window is deliberate.
    pub fn specify_new_route(&mut self, new_specification: RouteSpecification) {
        tracing::debug!(
            tracking_id = %self.tracking_id,
            destination = %new_specification.destination(),
            "route re-specified"
        );
        self.route_specification = new_specification;
        self.version += 1;
    }

    /// Replace the current itinerary unconditionally.
    ///
    /// Whether the itinerary satisfies the current route specification is the
    /// routing workflow's responsibility, checked via
    /// [`RouteSpecification::is_satisfied_by`] before calling this.
    pub fn assign_to_route(&mut self, itinerary: Itinerary) {
        tracing::debug!(
            tracking_id = %self.tracking_id,
            legs = itinerary.legs().len(),
            "cargo assigned to route"
        );
        self.itinerary = itinerary;
        self.version += 1;
    }
}

impl Entity for Cargo {
    type Id = TrackingId;

    fn id(&self) -> &Self::Id {
        &self.tracking_id
    }
}

impl AggregateRoot for Cargo {
    fn version(&self) -> u64 {
        self.version
    }
}

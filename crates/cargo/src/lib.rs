//! Cargo booking domain module.
//!
//! This crate contains the business rules for booked cargo, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). A cargo
//! is booked against a route specification, assigned an itinerary by an
//! external routing workflow, and may be re-routed any number of times while
//! in transit.

pub mod cargo;
pub mod itinerary;
pub mod location;
pub mod route_specification;
pub mod tracking_id;

pub use cargo::Cargo;
pub use itinerary::{Itinerary, Leg};
pub use location::Location;
pub use route_specification::RouteSpecification;
pub use tracking_id::TrackingId;

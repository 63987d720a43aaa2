use serde::{Deserialize, Serialize};

use freightline_core::{DomainError, DomainResult, ValueObject};

use crate::location::Location;

/// One load/unload segment of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    load_location: Location,
    unload_location: Location,
}

impl Leg {
    pub fn new(load_location: Location, unload_location: Location) -> DomainResult<Self> {
        if load_location == unload_location {
            return Err(DomainError::invalid_argument(format!(
                "leg cannot load and unload at the same location: {load_location}"
            )));
        }
        Ok(Self {
            load_location,
            unload_location,
        })
    }

    pub fn load_location(&self) -> &Location {
        &self.load_location
    }

    pub fn unload_location(&self) -> &Location {
        &self.unload_location
    }
}

impl ValueObject for Leg {}

/// An ordered sequence of legs describing a concrete planned route.
///
/// Immutable: re-routing constructs a new itinerary, it never mutates an
/// existing one. The empty itinerary is a valid, distinct state meaning
/// "not yet routed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    /// The canonical "not yet routed" itinerary.
    pub fn empty() -> Self {
        Self { legs: Vec::new() }
    }

    /// Legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Where the journey starts, if routed.
    pub fn first_load_location(&self) -> Option<&Location> {
        self.legs.first().map(Leg::load_location)
    }

    /// Where the journey ends, if routed.
    pub fn last_unload_location(&self) -> Option<&Location> {
        self.legs.last().map(Leg::unload_location)
    }
}

impl Default for Itinerary {
    fn default() -> Self {
        Self::empty()
    }
}

impl ValueObject for Itinerary {}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(name: &str) -> Location {
        Location::new(name).unwrap()
    }

    #[test]
    fn empty_itinerary_has_no_legs_and_no_endpoints() {
        let it = Itinerary::empty();
        assert!(it.is_empty());
        assert_eq!(it.legs().len(), 0);
        assert_eq!(it.first_load_location(), None);
        assert_eq!(it.last_unload_location(), None);
    }

    #[test]
    fn degenerate_leg_is_rejected() {
        let err = Leg::new(loc("NYC"), loc("NYC")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn legs_keep_travel_order() {
        let it = Itinerary::new(vec![
            Leg::new(loc("NYC"), loc("HONOLULU")).unwrap(),
            Leg::new(loc("HONOLULU"), loc("OSAKA")).unwrap(),
        ]);
        assert_eq!(it.legs().len(), 2);
        assert_eq!(it.first_load_location(), Some(&loc("NYC")));
        assert_eq!(it.legs()[0].unload_location(), &loc("HONOLULU"));
        assert_eq!(it.last_unload_location(), Some(&loc("OSAKA")));
    }

    #[test]
    fn itineraries_compare_by_value() {
        let a = Itinerary::new(vec![Leg::new(loc("NYC"), loc("OSAKA")).unwrap()]);
        let b = Itinerary::new(vec![Leg::new(loc("NYC"), loc("OSAKA")).unwrap()]);
        assert!(a.same_value_as(&b));
        assert!(!a.same_value_as(&Itinerary::empty()));
    }
}

//! Planned journeys and their legs.

use std::sync::Arc;

use super::error::PlanError;
use super::route::Route;
use super::stop::Stop;

/// One ride on a single route, from a boarding stop to an alighting stop.
#[derive(Debug, Clone)]
pub struct Leg {
    /// Boarding stop.
    pub from: Stop,

    /// Alighting stop.
    pub to: Stop,

    /// Routes usable for this leg, sorted by name. Never empty.
    routes: Vec<Arc<Route>>,

    /// Stops strictly between `from` and `to`, in travel order.
    pub intermediate_stops: Vec<Stop>,

    /// The terminus each usable route displays in this direction of travel
    /// ("towards Bury").
    pub termini: Vec<Stop>,

    /// Timetable-derived travel time.
    pub minutes: i64,
}

impl Leg {
    /// Build a leg. The route list must be non-empty and is kept in the
    /// order supplied (callers sort it by route name for determinism).
    pub fn new(
        from: Stop,
        to: Stop,
        routes: Vec<Arc<Route>>,
        intermediate_stops: Vec<Stop>,
        termini: Vec<Stop>,
        minutes: i64,
    ) -> Result<Self, PlanError> {
        if routes.is_empty() {
            return Err(PlanError::InvalidArgument(
                "leg must have at least one route",
            ));
        }

        Ok(Self {
            from,
            to,
            routes,
            intermediate_stops,
            termini,
            minutes,
        })
    }

    /// The representative route, used for intermediate stops, travel time
    /// and geometry. First of the name-sorted route list.
    pub fn route(&self) -> &Arc<Route> {
        &self.routes[0]
    }

    /// All routes usable for this leg.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }
}

/// A complete planned journey: direct, or with exactly one interchange.
///
/// Construction guarantees the shape invariant: a journey has an
/// interchange stop iff it has two legs.
#[derive(Debug, Clone)]
pub struct PlannedJourney {
    pub origin: Stop,
    pub destination: Stop,
    interchange: Option<Stop>,
    legs: Vec<Leg>,
}

impl PlannedJourney {
    /// A journey rideable on a single route.
    pub fn direct(origin: Stop, destination: Stop, leg: Leg) -> Self {
        Self {
            origin,
            destination,
            interchange: None,
            legs: vec![leg],
        }
    }

    /// A journey requiring one change of route at `interchange`.
    pub fn with_interchange(
        origin: Stop,
        destination: Stop,
        interchange: Stop,
        first: Leg,
        second: Leg,
    ) -> Self {
        Self {
            origin,
            destination,
            interchange: Some(interchange),
            legs: vec![first, second],
        }
    }

    /// Whether the traveller must change routes.
    pub fn requires_interchange(&self) -> bool {
        self.interchange.is_some()
    }

    /// The interchange stop, present iff the journey has two legs.
    pub fn interchange(&self) -> Option<&Stop> {
        self.interchange.as_ref()
    }

    /// The legs of the journey, in travel order. One or two.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// The leg departing the origin.
    pub fn first_leg(&self) -> &Leg {
        &self.legs[0]
    }

    /// The leg departing the interchange, if any.
    pub fn second_leg(&self) -> Option<&Leg> {
        self.legs.get(1)
    }

    /// Sum of per-leg minutes.
    pub fn total_minutes(&self) -> i64 {
        self.legs.iter().map(|leg| leg.minutes).sum()
    }

    /// Every stop the journey passes through, in travel order:
    /// origin, first-leg intermediates, interchange (if any), second-leg
    /// intermediates, destination.
    pub fn stop_sequence(&self) -> Vec<&Stop> {
        let mut sequence = vec![&self.origin];
        sequence.extend(&self.legs[0].intermediate_stops);
        if let Some(interchange) = &self.interchange {
            sequence.push(interchange);
            if let Some(second) = self.legs.get(1) {
                sequence.extend(&second.intermediate_stops);
            }
        }
        sequence.push(&self.destination);
        sequence
    }
}

//! Journey orchestration.

use tracing::debug;

use crate::domain::{Leg, PlanError, PlannedJourney, Stop};
use crate::network::RouteGraph;
use crate::repository::{RouteRepository, StopRepository};
use crate::resolve::StopResolver;

use super::travel_time::TravelTimeCalculator;

/// Plans complete journeys between two stops.
///
/// Owns the repository handles and builds a fresh [`RouteGraph`] snapshot
/// per call, so concurrent requests never share mutable state.
pub struct JourneyPlanner<S, R> {
    stops: S,
    routes: R,
}

impl<S: StopRepository, R: RouteRepository> JourneyPlanner<S, R> {
    pub fn new(stops: S, routes: R) -> Self {
        Self { stops, routes }
    }

    /// Plan a journey between two free-text stop identifiers.
    pub fn plan(
        &self,
        origin_identifier: &str,
        destination_identifier: &str,
    ) -> Result<PlannedJourney, PlanError> {
        let resolver = StopResolver::new(&self.stops);
        let origin = resolver.resolve(origin_identifier)?;
        let destination = resolver.resolve(destination_identifier)?;
        self.plan_between(origin, destination)
    }

    /// Plan a journey between two already-resolved stops.
    pub fn plan_between(
        &self,
        origin: Stop,
        destination: Stop,
    ) -> Result<PlannedJourney, PlanError> {
        let graph = RouteGraph::new(self.routes.routes());

        if !graph.interchange_required(&origin, &destination) {
            let leg = self.build_leg(&graph, &origin, &destination)?;
            debug!(
                origin = %origin.name,
                destination = %destination.name,
                minutes = leg.minutes,
                "planned direct journey"
            );
            return Ok(PlannedJourney::direct(origin, destination, leg));
        }

        let interchange = graph.identify_interchange_stop(&origin, &destination)?;
        let first = self.build_leg(&graph, &origin, &interchange)?;
        let second = self.build_leg(&graph, &interchange, &destination)?;
        debug!(
            origin = %origin.name,
            destination = %destination.name,
            interchange = %interchange.name,
            minutes = first.minutes + second.minutes,
            "planned journey with interchange"
        );
        Ok(PlannedJourney::with_interchange(
            origin,
            destination,
            interchange,
            first,
            second,
        ))
    }

    /// Build one leg: routes connecting the endpoints (name-sorted), the
    /// intermediate stops and minutes on the first of them, and the
    /// terminus each route displays in this direction.
    fn build_leg(&self, graph: &RouteGraph, from: &Stop, to: &Stop) -> Result<Leg, PlanError> {
        let routes = graph.routes_between(from, to);
        let Some(representative) = routes.first().cloned() else {
            // Unreachable after interchange selection unless the route
            // data is inconsistent with itself.
            return Err(PlanError::InvalidArgument(
                "no route connects the leg endpoints",
            ));
        };

        let intermediate_stops = graph.intermediate_stops(from, to, &representative)?;

        let mut termini: Vec<Stop> = Vec::new();
        for route in &routes {
            let terminus = graph.route_terminus(from, to, route)?;
            if !termini.iter().any(|t| t.code == terminus.code) {
                termini.push(terminus);
            }
        }

        let minutes = TravelTimeCalculator::new(&self.routes).minutes_between(
            &representative.name,
            &from.name,
            &to.name,
        )?;

        Leg::new(
            from.clone(),
            to.clone(),
            routes,
            intermediate_stops,
            termini,
            minutes,
        )
    }
}

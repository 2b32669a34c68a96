//! Queries over the ordered stop sequences of the route list.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{PlanError, Route, Stop};

/// A candidate interchange stop with its distances (in stops, endpoints
/// counted once) to the journey endpoints. Kept as an explicit table so
/// the selection rule reads off the struct rather than ad hoc maps.
#[derive(Debug, Clone)]
struct InterchangeCandidate {
    stop: Stop,
    stops_to_destination: usize,
    stops_from_origin: usize,
}

/// Pure topology queries over a snapshot of the route list.
///
/// Routes are held sorted by name, so every place that needs one
/// representative route out of several (intermediate stops, travel time,
/// geometry) deterministically picks the lexicographically first.
pub struct RouteGraph {
    routes: Vec<Arc<Route>>,
}

impl RouteGraph {
    pub fn new(mut routes: Vec<Arc<Route>>) -> Self {
        routes.sort_by(|a, b| a.name.cmp(&b.name));
        Self { routes }
    }

    /// All routes whose stop sequence contains the given stop.
    pub fn routes_containing(&self, stop: &Stop) -> Vec<Arc<Route>> {
        self.routes
            .iter()
            .filter(|r| r.contains(stop))
            .cloned()
            .collect()
    }

    /// All routes containing both stops, sorted by name.
    pub fn routes_between(&self, origin: &Stop, destination: &Stop) -> Vec<Arc<Route>> {
        self.routes
            .iter()
            .filter(|r| r.connects(origin, destination))
            .cloned()
            .collect()
    }

    /// True iff no single route serves both stops.
    pub fn interchange_required(&self, origin: &Stop, destination: &Stop) -> bool {
        self.routes_between(origin, destination).is_empty()
    }

    /// Stops strictly between the two endpoints on `route`, ordered in the
    /// direction of travel.
    pub fn intermediate_stops(
        &self,
        origin: &Stop,
        destination: &Stop,
        route: &Route,
    ) -> Result<Vec<Stop>, PlanError> {
        let origin_idx = position_on(route, origin)?;
        let destination_idx = position_on(route, destination)?;

        let stops = if origin_idx == destination_idx {
            Vec::new()
        } else if origin_idx < destination_idx {
            route.stops[origin_idx + 1..destination_idx].to_vec()
        } else {
            let mut reversed = route.stops[destination_idx + 1..origin_idx].to_vec();
            reversed.reverse();
            reversed
        };

        Ok(stops)
    }

    /// The stop the tram displays as its destination for this direction of
    /// travel: the route's last stop when travelling with increasing index,
    /// its first stop otherwise.
    pub fn route_terminus(
        &self,
        origin: &Stop,
        destination: &Stop,
        route: &Route,
    ) -> Result<Stop, PlanError> {
        let origin_idx = position_on(route, origin)?;
        let destination_idx = position_on(route, destination)?;

        let terminus = if destination_idx > origin_idx {
            route.stops.last()
        } else {
            route.stops.first()
        };

        // Routes always have stops; both endpoints were just found on this one.
        terminus.cloned().ok_or(PlanError::InvalidArgument(
            "route has an empty stop sequence",
        ))
    }

    /// Select the stop to change at for a journey that no single route
    /// covers.
    ///
    /// Every stop shared between a route serving the origin and a route
    /// serving the destination is a candidate. The winner is the candidate
    /// fewest stops from the destination — the hub-and-spoke shape means
    /// that minimizes backtracking — with ties broken by fewest stops from
    /// the origin, then by stop code so repeated calls agree.
    pub fn identify_interchange_stop(
        &self,
        origin: &Stop,
        destination: &Stop,
    ) -> Result<Stop, PlanError> {
        let origin_routes = self.routes_containing(origin);
        let destination_routes = self.routes_containing(destination);

        let mut candidates: Vec<InterchangeCandidate> = Vec::new();
        for origin_route in &origin_routes {
            for destination_route in &destination_routes {
                for stop in &origin_route.stops {
                    if !destination_route.contains(stop) {
                        continue;
                    }

                    let stops_to_destination = self
                        .intermediate_stops(stop, destination, destination_route)?
                        .len()
                        + 1;
                    let stops_from_origin =
                        self.intermediate_stops(origin, stop, origin_route)?.len() + 1;

                    candidates.push(InterchangeCandidate {
                        stop: stop.clone(),
                        stops_to_destination,
                        stops_from_origin,
                    });
                }
            }
        }

        debug!(
            origin = %origin.name,
            destination = %destination.name,
            candidates = candidates.len(),
            "interchange candidates collected"
        );

        candidates
            .into_iter()
            .min_by_key(|c| (c.stops_to_destination, c.stops_from_origin, c.stop.code))
            .map(|c| c.stop)
            .ok_or_else(|| PlanError::NoInterchange {
                origin: origin.name.clone(),
                destination: destination.name.clone(),
            })
    }
}

fn position_on(route: &Route, stop: &Stop) -> Result<usize, PlanError> {
    route
        .position_of(stop)
        .ok_or_else(|| PlanError::NotOnRoute {
            route: route.name.clone(),
            stop: stop.name.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{
        altrincham, bury, network, piccadilly, purple_route, route, stop, victoria, zoned_stop,
    };

    fn graph() -> RouteGraph {
        RouteGraph::new(network())
    }

    fn names(stops: &[Stop]) -> Vec<&str> {
        stops.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn no_interchange_on_shared_route() {
        let g = graph();
        assert!(!g.interchange_required(&altrincham(), &piccadilly()));
        assert!(!g.interchange_required(&victoria(), &bury()));
    }

    #[test]
    fn interchange_when_no_shared_route() {
        let g = graph();
        let ashton = zoned_stop("AUL", "Ashton-Under-Lyne", "4");
        assert!(g.interchange_required(&altrincham(), &ashton));
    }

    #[test]
    fn routes_between_sorted_by_name() {
        let g = graph();
        let between = g.routes_between(&victoria(), &bury());
        let route_names: Vec<&str> = between.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(route_names, vec!["Green", "Yellow"]);
    }

    #[test]
    fn intermediate_stops_forward() {
        let g = graph();
        let stops = g
            .intermediate_stops(&altrincham(), &piccadilly(), &purple_route())
            .unwrap();
        assert_eq!(
            names(&stops),
            vec![
                "Timperley",
                "Brooklands",
                "Sale",
                "Stretford",
                "Trafford Bar",
                "Cornbrook",
                "St Peter's Square"
            ]
        );
    }

    #[test]
    fn intermediate_stops_backward_is_reversed() {
        let g = graph();
        let route = purple_route();
        let forward = g
            .intermediate_stops(&altrincham(), &piccadilly(), &route)
            .unwrap();
        let backward = g
            .intermediate_stops(&piccadilly(), &altrincham(), &route)
            .unwrap();

        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(names(&backward), names(&reversed));
    }

    #[test]
    fn intermediate_stops_adjacent_is_empty() {
        let g = graph();
        let route = purple_route();
        let timperley = zoned_stop("TIM", "Timperley", "4");
        let stops = g
            .intermediate_stops(&altrincham(), &timperley, &route)
            .unwrap();
        assert!(stops.is_empty());
    }

    #[test]
    fn intermediate_stops_same_endpoint_is_empty() {
        let g = graph();
        let stops = g
            .intermediate_stops(&altrincham(), &altrincham(), &purple_route())
            .unwrap();
        assert!(stops.is_empty());
    }

    #[test]
    fn intermediate_stops_not_on_route() {
        let g = graph();
        let result = g.intermediate_stops(&altrincham(), &bury(), &purple_route());
        assert!(matches!(result, Err(PlanError::NotOnRoute { .. })));
    }

    #[test]
    fn terminus_follows_direction() {
        let g = graph();
        let route = purple_route();

        let towards_city = g
            .route_terminus(&altrincham(), &piccadilly(), &route)
            .unwrap();
        assert_eq!(towards_city.name, "Piccadilly");

        let towards_altrincham = g
            .route_terminus(&piccadilly(), &altrincham(), &route)
            .unwrap();
        assert_eq!(towards_altrincham.name, "Altrincham");
    }

    #[test]
    fn interchange_for_altrincham_to_ashton_is_piccadilly() {
        let g = graph();
        let ashton = zoned_stop("AUL", "Ashton-Under-Lyne", "4");
        let interchange = g
            .identify_interchange_stop(&altrincham(), &ashton)
            .unwrap();
        assert_eq!(interchange.name, "Piccadilly");
    }

    #[test]
    fn interchange_for_airport_to_bury_is_victoria() {
        // Market Street and Shudehill are also shared with the Yellow route
        // but sit further from Bury than Victoria does.
        let g = graph();
        let airport = zoned_stop("MAN", "Manchester Airport", "4");
        let interchange = g.identify_interchange_stop(&airport, &bury()).unwrap();
        assert_eq!(interchange.name, "Victoria");
    }

    #[test]
    fn interchange_tie_breaks_on_origin_distance() {
        // Two candidates equally close to the destination; the one reached
        // sooner from the origin wins.
        let long_way = Arc::new(route("R1", &[("AAA", "A"), ("BBB", "B"), ("XXX", "X")]));
        let short_way = Arc::new(route("R2", &[("AAA", "A"), ("YYY", "Y")]));
        let via_x = Arc::new(route("R3", &[("XXX", "X"), ("DDD", "D")]));
        let via_y = Arc::new(route("R4", &[("YYY", "Y"), ("DDD", "D")]));

        let g = RouteGraph::new(vec![long_way, short_way, via_x, via_y]);
        let interchange = g
            .identify_interchange_stop(&stop("AAA", "A"), &stop("DDD", "D"))
            .unwrap();
        assert_eq!(interchange.name, "Y");
    }

    #[test]
    fn no_interchange_candidates_is_an_error() {
        let g = RouteGraph::new(vec![
            Arc::new(route("R1", &[("AAA", "A"), ("BBB", "B")])),
            Arc::new(route("R2", &[("CCC", "C"), ("DDD", "D")])),
        ]);
        let result = g.identify_interchange_stop(&stop("AAA", "A"), &stop("DDD", "D"));
        assert!(matches!(result, Err(PlanError::NoInterchange { .. })));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::test_support::purple_route;
    use proptest::prelude::*;

    proptest! {
        /// Intermediate stops of A→B and B→A are the same set in reverse
        /// order, for any pair of positions on the route.
        #[test]
        fn reversal_property(a in 0usize..9, b in 0usize..9) {
            let route = purple_route();
            let graph = RouteGraph::new(vec![Arc::new(route.clone())]);
            let origin = route.stops[a].clone();
            let destination = route.stops[b].clone();

            let forward = graph.intermediate_stops(&origin, &destination, &route).unwrap();
            let mut backward = graph.intermediate_stops(&destination, &origin, &route).unwrap();
            backward.reverse();

            prop_assert_eq!(forward, backward);
        }

        /// Intermediate stops never contain either endpoint.
        #[test]
        fn endpoints_excluded(a in 0usize..9, b in 0usize..9) {
            let route = purple_route();
            let graph = RouteGraph::new(vec![Arc::new(route.clone())]);
            let origin = route.stops[a].clone();
            let destination = route.stops[b].clone();

            let stops = graph.intermediate_stops(&origin, &destination, &route).unwrap();
            prop_assert!(!stops.iter().any(|s| s.is_same_stop(&origin)));
            prop_assert!(!stops.iter().any(|s| s.is_same_stop(&destination)));
        }
    }
}

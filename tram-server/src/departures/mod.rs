//! Matching the live feed to a planned direction of travel.
//!
//! The feed reports upcoming trams per stop as (destination text, wait)
//! pairs. A tram is only useful if its displayed destination lies at or
//! beyond the planned destination in the planned direction of travel;
//! anything else is a tram going the wrong way.

mod via;

pub use via::normalize_destination;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Route, Stop, StopCode};

/// One upcoming tram reported by the live feed.
#[derive(Debug, Clone)]
pub struct LiveService {
    /// Destination text as displayed, possibly with a "via" clause.
    pub destination: String,

    /// Advertised wait, as the feed's string (usually whole minutes).
    pub wait: String,

    /// Code of the stop this report came from.
    pub source_code: StopCode,
}

/// The soonest correctly-directed departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextDeparture {
    /// Normalized destination label the tram will display.
    pub destination: String,

    /// Minutes until it departs.
    pub wait_minutes: i64,
}

/// Find the soonest live departure heading the planned way.
///
/// For each candidate route, the displayed destinations that fit the
/// planned direction are the stops from the planned destination to the
/// route's end, inclusive. Live destinations are normalized with
/// [`normalize_destination`] before matching. Returns `None` when no live
/// destination matches any candidate — a valid "no determinable next
/// service" result, not an error.
pub fn identify_next(
    origin: &Stop,
    destination: &Stop,
    candidate_routes: &[Arc<Route>],
    live_services: &[LiveService],
) -> Option<NextDeparture> {
    // Minimum advertised wait per normalized destination name. Entries
    // with unparseable waits are dropped.
    let mut live_waits: HashMap<String, i64> = HashMap::new();
    for service in live_services {
        let name = normalize_destination(&service.destination);
        let Ok(wait) = service.wait.trim().parse::<i64>() else {
            debug!(wait = %service.wait, destination = %service.destination, "unparseable wait, skipping");
            continue;
        };
        live_waits
            .entry(name)
            .and_modify(|w| *w = (*w).min(wait))
            .or_insert(wait);
    }

    let mut best: Option<NextDeparture> = None;
    for route in candidate_routes {
        let Some(origin_idx) = route.position_of(origin) else {
            continue;
        };
        let Some(destination_idx) = route.position_of(destination) else {
            continue;
        };

        // Stops from the planned destination to the end of the route in
        // the direction of travel, inclusive: the destinations a
        // correctly-directed tram could display.
        let displayed: Vec<&Stop> = if destination_idx >= origin_idx {
            route.stops[destination_idx..].iter().collect()
        } else {
            route.stops[..=destination_idx].iter().rev().collect()
        };

        for stop in displayed {
            let Some(&wait) = live_waits.get(&stop.name) else {
                continue;
            };
            let candidate = NextDeparture {
                destination: stop.name.clone(),
                wait_minutes: wait,
            };
            let better = match &best {
                None => true,
                Some(current) => {
                    wait < current.wait_minutes
                        || (wait == current.wait_minutes
                            && candidate.destination < current.destination)
                }
            };
            if better {
                best = Some(candidate);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopCode;
    use crate::domain::test_support::{
        altrincham, bury, network, piccadilly, shudehill, victoria,
    };

    fn live(destination: &str, wait: &str) -> LiveService {
        LiveService {
            destination: destination.to_string(),
            wait: wait.to_string(),
            source_code: StopCode::parse("VIC").unwrap(),
        }
    }

    fn routes_between(origin: &crate::domain::Stop, destination: &crate::domain::Stop) -> Vec<Arc<Route>> {
        network()
            .into_iter()
            .filter(|r| r.connects(origin, destination))
            .collect()
    }

    #[test]
    fn picks_correctly_directed_departure() {
        let candidates = routes_between(&victoria(), &bury());
        let services = vec![live("Bury", "4"), live("Piccadilly", "2")];

        let next = identify_next(&victoria(), &bury(), &candidates, &services).unwrap();
        assert_eq!(next.destination, "Bury");
        assert_eq!(next.wait_minutes, 4);
    }

    #[test]
    fn normalizes_via_clauses_before_matching() {
        let candidates = routes_between(&victoria(), &bury());
        let services = vec![live("Bury via Whitefield", "7")];

        let next = identify_next(&victoria(), &bury(), &candidates, &services).unwrap();
        assert_eq!(next.destination, "Bury");
        assert_eq!(next.wait_minutes, 7);
    }

    #[test]
    fn minimum_wait_wins_for_a_destination() {
        let candidates = routes_between(&victoria(), &bury());
        let services = vec![live("Bury", "12"), live("Bury via Whitefield", "4")];

        let next = identify_next(&victoria(), &bury(), &candidates, &services).unwrap();
        assert_eq!(next.wait_minutes, 4);
    }

    #[test]
    fn smaller_wait_wins_across_destinations() {
        // Travelling Victoria → Shudehill, both Shudehill and Piccadilly
        // are valid displayed destinations; the smaller wait decides.
        let candidates = routes_between(&victoria(), &shudehill());
        let services = vec![live("Piccadilly", "9"), live("Shudehill", "3")];

        let next = identify_next(&victoria(), &shudehill(), &candidates, &services).unwrap();
        assert_eq!(next.destination, "Shudehill");
        assert_eq!(next.wait_minutes, 3);
    }

    #[test]
    fn wrong_direction_does_not_match() {
        // Heading out to Bury; a tram displaying Victoria (behind the
        // planned destination) is going the wrong way.
        let candidates = routes_between(&victoria(), &bury());
        let services = vec![live("Victoria", "1")];

        assert!(identify_next(&victoria(), &bury(), &candidates, &services).is_none());
    }

    #[test]
    fn backward_traversal_matches_route_start() {
        // Bury → Victoria travels against the stop order of both routes,
        // so displayed destinations run from Victoria back to each route's
        // first stop.
        let candidates = routes_between(&bury(), &victoria());
        let services = vec![live("Piccadilly", "6"), live("Bury", "2")];

        let next = identify_next(&bury(), &victoria(), &candidates, &services).unwrap();
        assert_eq!(next.destination, "Piccadilly");
        assert_eq!(next.wait_minutes, 6);
    }

    #[test]
    fn no_match_returns_none() {
        let candidates = routes_between(&altrincham(), &piccadilly());
        let services = vec![live("Eccles", "3"), live("MediaCityUK", "5")];

        assert!(identify_next(&altrincham(), &piccadilly(), &candidates, &services).is_none());
    }

    #[test]
    fn empty_feed_returns_none() {
        let candidates = routes_between(&altrincham(), &piccadilly());
        assert!(identify_next(&altrincham(), &piccadilly(), &candidates, &[]).is_none());
    }

    #[test]
    fn unparseable_wait_is_skipped() {
        let candidates = routes_between(&victoria(), &bury());
        let services = vec![live("Bury", "due"), live("Bury", "5")];

        let next = identify_next(&victoria(), &bury(), &candidates, &services).unwrap();
        assert_eq!(next.wait_minutes, 5);
    }

    #[test]
    fn equal_waits_tie_break_deterministically() {
        let candidates = routes_between(&victoria(), &bury());
        // Bury and (hypothetically) a beyond-destination stop with the
        // same wait: lexicographically smaller name wins.
        let services = vec![live("Bury", "4"), live("Whitefield", "4")];

        // Whitefield sits before Bury in travel order, so only Bury is a
        // displayed destination beyond the planned one... except the
        // planned destination here is Whitefield itself.
        let whitefield = candidates[0]
            .stops
            .iter()
            .find(|s| s.name == "Whitefield")
            .unwrap()
            .clone();
        let next = identify_next(&victoria(), &whitefield, &candidates, &services).unwrap();
        assert_eq!(next.destination, "Bury");
        assert_eq!(next.wait_minutes, 4);
    }
}

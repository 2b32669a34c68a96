//! Repository traits over the static network snapshot.
//!
//! The planning core only ever sees already-materialized, in-memory data;
//! these traits are the seam between it and whatever loaded that data.
//! The in-memory implementations back both production (fed from JSON
//! fixtures) and tests (fed from constructed networks).

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Route, Stop, Timetable};

/// Lookup for stops by free-text identifier.
pub trait StopRepository {
    /// Find a stop whose exact name or code matches the identifier.
    fn get_stop(&self, identifier: &str) -> Option<Stop>;

    /// All stops in the network.
    fn get_all(&self) -> Vec<Stop>;
}

/// Lookup for routes and their example timetables.
pub trait RouteRepository {
    /// All routes in the network.
    fn routes(&self) -> Vec<Arc<Route>>;

    /// The example timetable for a route, if one exists.
    fn timetable(&self, route_name: &str) -> Option<Arc<Timetable>>;
}

impl<T: StopRepository> StopRepository for Arc<T> {
    fn get_stop(&self, identifier: &str) -> Option<Stop> {
        self.as_ref().get_stop(identifier)
    }

    fn get_all(&self) -> Vec<Stop> {
        self.as_ref().get_all()
    }
}

impl<T: RouteRepository> RouteRepository for Arc<T> {
    fn routes(&self) -> Vec<Arc<Route>> {
        self.as_ref().routes()
    }

    fn timetable(&self, route_name: &str) -> Option<Arc<Timetable>> {
        self.as_ref().timetable(route_name)
    }
}

/// In-memory stop snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStops {
    stops: Vec<Stop>,
}

impl InMemoryStops {
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }
}

impl StopRepository for InMemoryStops {
    fn get_stop(&self, identifier: &str) -> Option<Stop> {
        self.stops
            .iter()
            .find(|s| s.matches_identifier(identifier))
            .cloned()
    }

    fn get_all(&self) -> Vec<Stop> {
        self.stops.clone()
    }
}

/// In-memory route and timetable snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoutes {
    routes: Vec<Arc<Route>>,
    timetables: HashMap<String, Arc<Timetable>>,
}

impl InMemoryRoutes {
    pub fn new(routes: Vec<Arc<Route>>, timetables: Vec<Timetable>) -> Self {
        let timetables = timetables
            .into_iter()
            .map(|t| (t.route_name.clone(), Arc::new(t)))
            .collect();
        Self { routes, timetables }
    }
}

impl RouteRepository for InMemoryRoutes {
    fn routes(&self) -> Vec<Arc<Route>> {
        self.routes.clone()
    }

    fn timetable(&self, route_name: &str) -> Option<Arc<Timetable>> {
        self.timetables.get(route_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{network, network_stops, timetables};

    #[test]
    fn get_stop_by_name_or_code() {
        let repo = InMemoryStops::new(network_stops());

        assert_eq!(repo.get_stop("Altrincham").unwrap().code.as_str(), "ALT");
        assert_eq!(repo.get_stop("ALT").unwrap().name, "Altrincham");
        assert_eq!(repo.get_stop("alt").unwrap().name, "Altrincham");
        assert!(repo.get_stop("Narnia").is_none());
    }

    #[test]
    fn get_all_returns_every_stop() {
        let repo = InMemoryStops::new(network_stops());
        // 9 Purple + 6 Blue + 7 Navy + 6 Green branch + 0 new on Yellow
        assert_eq!(repo.get_all().len(), 28);
    }

    #[test]
    fn timetable_lookup() {
        let repo = InMemoryRoutes::new(network(), timetables());

        assert!(repo.timetable("Purple").is_some());
        assert!(repo.timetable("Magenta").is_none());
        assert_eq!(repo.routes().len(), 5);
    }
}

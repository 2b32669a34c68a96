//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedLiveSource;
use crate::planner::JourneyPlanner;
use crate::repository::{InMemoryRoutes, InMemoryStops};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Stop lookup, shared with the planner
    pub stops: Arc<InMemoryStops>,

    /// Route and timetable lookup, shared with the planner
    pub routes: Arc<InMemoryRoutes>,

    /// Journey planner over the shared repositories
    pub planner: Arc<JourneyPlanner<Arc<InMemoryStops>, Arc<InMemoryRoutes>>>,

    /// Cached live departure source
    pub live: Arc<CachedLiveSource>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stops: InMemoryStops, routes: InMemoryRoutes, live: CachedLiveSource) -> Self {
        let stops = Arc::new(stops);
        let routes = Arc::new(routes);
        let planner = Arc::new(JourneyPlanner::new(stops.clone(), routes.clone()));
        Self {
            stops,
            routes,
            planner,
            live: Arc::new(live),
        }
    }
}

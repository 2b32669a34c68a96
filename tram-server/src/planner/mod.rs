//! Journey planning.
//!
//! Orchestrates stop resolution, route-topology queries and timetable
//! deltas into a complete [`crate::domain::PlannedJourney`]. Exactly two
//! journey shapes exist — direct, and one interchange — chosen once per
//! call; there is no search, retry or backoff at this layer.

mod plan;
mod travel_time;

pub use plan::JourneyPlanner;
pub use travel_time::TravelTimeCalculator;

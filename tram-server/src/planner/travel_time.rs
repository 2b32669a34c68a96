//! Timetable-derived travel times.

use crate::domain::PlanError;
use crate::repository::RouteRepository;

/// Computes travel time between two stops on a route from the route's
/// example timetable.
///
/// The timetable entries are not real departure times; only the absolute
/// difference between two entries is meaningful, so the result is
/// symmetric in origin and destination.
pub struct TravelTimeCalculator<'a, R: RouteRepository> {
    routes: &'a R,
}

impl<'a, R: RouteRepository> TravelTimeCalculator<'a, R> {
    pub fn new(routes: &'a R) -> Self {
        Self { routes }
    }

    /// Minutes between two stops on the named route, rounded to the
    /// nearest whole minute.
    pub fn minutes_between(
        &self,
        route_name: &str,
        origin_name: &str,
        destination_name: &str,
    ) -> Result<i64, PlanError> {
        let timetable = self
            .routes
            .timetable(route_name)
            .ok_or_else(|| PlanError::TimetableNotFound(route_name.to_string()))?;

        let time_at = |stop_name: &str| {
            timetable
                .time_for(stop_name)
                .ok_or_else(|| PlanError::TimetableStopMissing {
                    route: route_name.to_string(),
                    stop: stop_name.to_string(),
                })
        };

        let origin_time = time_at(origin_name)?;
        let destination_time = time_at(destination_name)?;

        let delta_seconds = (destination_time - origin_time).num_seconds().abs();
        Ok((delta_seconds as f64 / 60.0).round() as i64)
    }
}

//! Line-geometry extraction for map display.
//!
//! Derives, for each leg of a planned journey, the sub-polyline of the
//! leg's route between the leg's endpoint stops. Endpoint stops are
//! matched to polyline coordinates by a linear scan with a small fixed
//! per-axis tolerance; the first coordinate within tolerance wins.
//!
//! The slice is returned in the route's native polyline order, even when
//! the leg travels against that order. Known limitation: consumers must
//! render order-agnostically.

use crate::domain::{PlanError, Point, PlannedJourney, Route, Stop};

/// Per-axis tolerance, in decimal degrees, for matching a stop
/// coordinate to a polyline coordinate (roughly 50 m at this latitude).
pub const COORD_TOLERANCE: f64 = 0.0005;

/// The polyline segments for a planned journey's legs.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyGeometry {
    /// Geometry for the leg departing the origin.
    pub from_origin: Vec<Point>,

    /// Geometry for the leg departing the interchange, if the journey
    /// has one.
    pub from_interchange: Option<Vec<Point>>,
}

/// Extract the polyline segments corresponding to each leg of a journey.
pub fn visualise(journey: &PlannedJourney) -> Result<JourneyGeometry, PlanError> {
    let first = journey.first_leg();
    let from_origin = leg_segment(first.route(), &first.from, &first.to)?;

    let from_interchange = match journey.second_leg() {
        Some(second) => Some(leg_segment(second.route(), &second.from, &second.to)?),
        None => None,
    };

    Ok(JourneyGeometry {
        from_origin,
        from_interchange,
    })
}

/// The sub-polyline of `route` between the coordinates nearest the two
/// stops, inclusive, in the route's native order.
fn leg_segment(route: &Route, from: &Stop, to: &Stop) -> Result<Vec<Point>, PlanError> {
    let start = nearest_index(route, from)?;
    let end = nearest_index(route, to)?;

    let (low, high) = (start.min(end), start.max(end));
    Ok(route.polyline[low..=high].to_vec())
}

/// First polyline index within tolerance of the stop's coordinate.
fn nearest_index(route: &Route, stop: &Stop) -> Result<usize, PlanError> {
    let target = Point::new(stop.latitude, stop.longitude);
    route
        .polyline
        .iter()
        .position(|p| p.near(&target, COORD_TOLERANCE))
        .ok_or_else(|| PlanError::MissingGeometry(route.name.clone()))
}

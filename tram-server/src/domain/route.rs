//! Routes and their line geometry.

use super::stop::Stop;

/// A geographic coordinate on a route's line geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether another point lies within a per-axis coordinate tolerance.
    pub fn near(&self, other: &Point, tolerance: f64) -> bool {
        (self.latitude - other.latitude).abs() <= tolerance
            && (self.longitude - other.longitude).abs() <= tolerance
    }
}

/// A named, colored tram line.
///
/// The stop sequence is ordered; position encodes direction. Traversal with
/// increasing index is one direction of travel, decreasing index the other.
/// The polyline traces the line geometry in the same direction as the stop
/// sequence. A stop appears at most once per route.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Route name, e.g. "Purple".
    pub name: String,

    /// Display color for map rendering, e.g. "#7B2082".
    pub color: String,

    /// Ordered stops along the line.
    pub stops: Vec<Stop>,

    /// Line geometry, in stop-sequence order.
    pub polyline: Vec<Point>,
}

impl Route {
    /// Index of a stop on this route, matching by name or code.
    pub fn position_of(&self, stop: &Stop) -> Option<usize> {
        self.stops.iter().position(|s| s.is_same_stop(stop))
    }

    /// Whether the route's stop sequence contains the given stop.
    pub fn contains(&self, stop: &Stop) -> bool {
        self.position_of(stop).is_some()
    }

    /// Whether the route's stop sequence contains both stops.
    pub fn connects(&self, a: &Stop, b: &Stop) -> bool {
        self.contains(a) && self.contains(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{route, stop};

    #[test]
    fn position_of_finds_by_name_or_code() {
        let r = route("Purple", &[("ALT", "Altrincham"), ("TIM", "Timperley")]);

        let by_code = stop("ALT", "Altrincham Interchange");
        assert_eq!(r.position_of(&by_code), Some(0));

        let by_name = stop("XXX", "Timperley");
        assert_eq!(r.position_of(&by_name), Some(1));

        let absent = stop("PIC", "Piccadilly");
        assert_eq!(r.position_of(&absent), None);
    }

    #[test]
    fn connects_requires_both() {
        let r = route("Purple", &[("ALT", "Altrincham"), ("TIM", "Timperley")]);

        assert!(r.connects(&stop("ALT", "Altrincham"), &stop("TIM", "Timperley")));
        assert!(!r.connects(&stop("ALT", "Altrincham"), &stop("PIC", "Piccadilly")));
    }

    #[test]
    fn point_near_tolerance() {
        let a = Point::new(53.4000, -2.3000);
        let b = Point::new(53.4003, -2.3003);
        assert!(a.near(&b, 0.0005));
        assert!(!a.near(&b, 0.0001));
    }
}

//! Per-route example timetables.
//!
//! A timetable maps stop names to a time of day for one pass along the
//! route. The absolute values are meaningless; only the difference between
//! two stops' entries is used, as a travel-time proxy.

use std::collections::HashMap;

use chrono::NaiveTime;

/// Error returned when parsing an invalid timetable time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timetable time {value:?}: expected HH:MM:SS")]
pub struct InvalidTimetableTime {
    pub value: String,
}

/// Parse a fixture time in "HH:MM:SS" format.
pub fn parse_hhmmss(s: &str) -> Result<NaiveTime, InvalidTimetableTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|_| InvalidTimetableTime {
        value: s.to_string(),
    })
}

/// The example timetable for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct Timetable {
    /// Name of the route this timetable describes.
    pub route_name: String,

    /// Stop name → time of day for one example pass along the route.
    times: HashMap<String, NaiveTime>,
}

impl Timetable {
    pub fn new(route_name: impl Into<String>, times: HashMap<String, NaiveTime>) -> Self {
        Self {
            route_name: route_name.into(),
            times,
        }
    }

    /// The example time at a stop, if the stop is listed.
    pub fn time_for(&self, stop_name: &str) -> Option<NaiveTime> {
        self.times.get(stop_name).copied()
    }

    /// Number of stops with a timetable entry.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert_eq!(
            parse_hhmmss("06:32:00").unwrap(),
            NaiveTime::from_hms_opt(6, 32, 0).unwrap()
        );
        assert_eq!(
            parse_hhmmss("23:59:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
    }

    #[test]
    fn parse_rejects_bad_format() {
        assert!(parse_hhmmss("06:32").is_err());
        assert!(parse_hhmmss("6:32:00 am").is_err());
        assert!(parse_hhmmss("25:00:00").is_err());
        assert!(parse_hhmmss("").is_err());
    }

    #[test]
    fn time_for_lookup() {
        let mut times = HashMap::new();
        times.insert("Altrincham".to_string(), parse_hhmmss("06:00:00").unwrap());
        let timetable = Timetable::new("Purple", times);

        assert!(timetable.time_for("Altrincham").is_some());
        assert!(timetable.time_for("Piccadilly").is_none());
        assert_eq!(timetable.len(), 1);
        assert!(!timetable.is_empty());
    }
}

//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::departures::{LiveService, NextDeparture, normalize_destination};
use crate::domain::{Leg, PlannedJourney, Point, Stop};
use crate::geometry::JourneyGeometry;

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Origin stop name or code
    pub origin: String,

    /// Destination stop name or code
    pub destination: String,
}

/// Request for a live departure board.
#[derive(Debug, Deserialize)]
pub struct DeparturesRequest {
    /// Stop name or code
    pub stop: String,
}

/// A stop in a response.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Three-letter stop code
    pub code: String,

    /// Display name
    pub name: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Fare zone label, e.g. "2" or "3/4"
    pub zone: String,
}

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            code: stop.code.as_str().to_string(),
            name: stop.name.clone(),
            latitude: stop.latitude,
            longitude: stop.longitude,
            zone: stop.zone.to_string(),
        }
    }
}

/// One leg of a planned journey.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Name of the route the leg rides
    pub route: String,

    /// Route display colour
    pub color: String,

    pub from: StopResult,
    pub to: StopResult,

    /// Stops passed through, endpoints excluded
    pub intermediate_stops: Vec<StopResult>,

    /// Terminus each usable route displays in this direction
    pub termini: Vec<String>,

    /// Timetabled minutes for the leg
    pub minutes: i64,
}

impl LegResult {
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            route: leg.route().name.clone(),
            color: leg.route().color.clone(),
            from: StopResult::from_stop(&leg.from),
            to: StopResult::from_stop(&leg.to),
            intermediate_stops: leg
                .intermediate_stops
                .iter()
                .map(StopResult::from_stop)
                .collect(),
            termini: leg.termini.iter().map(|s| s.name.clone()).collect(),
            minutes: leg.minutes,
        }
    }
}

/// The soonest live departure for the journey's first leg.
#[derive(Debug, Serialize)]
pub struct NextDepartureResult {
    /// Destination the tram will display
    pub destination: String,

    /// Minutes until departure
    pub wait_minutes: i64,
}

impl NextDepartureResult {
    pub fn from_departure(next: &NextDeparture) -> Self {
        Self {
            destination: next.destination.clone(),
            wait_minutes: next.wait_minutes,
        }
    }
}

/// Polyline geometry for a journey, one coordinate list per leg.
#[derive(Debug, Serialize)]
pub struct GeometryResult {
    /// [latitude, longitude] pairs for the leg from the origin
    pub from_origin: Vec<[f64; 2]>,

    /// Pairs for the leg from the interchange, if any
    pub from_interchange: Option<Vec<[f64; 2]>>,
}

impl GeometryResult {
    pub fn from_geometry(geometry: &JourneyGeometry) -> Self {
        fn pairs(points: &[Point]) -> Vec<[f64; 2]> {
            points.iter().map(|p| [p.latitude, p.longitude]).collect()
        }

        Self {
            from_origin: pairs(&geometry.from_origin),
            from_interchange: geometry.from_interchange.as_deref().map(pairs),
        }
    }
}

/// Response for journey planning.
#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    pub origin: StopResult,
    pub destination: StopResult,

    /// Whether the journey needs a change of tram
    pub requires_interchange: bool,

    /// The interchange stop, present only for two-leg journeys
    pub interchange: Option<StopResult>,

    pub legs: Vec<LegResult>,

    /// Total timetabled minutes across all legs
    pub total_minutes: i64,

    /// Ascending, deduplicated fare zones the journey passes through
    pub zones: Vec<u8>,

    pub geometry: GeometryResult,

    /// Soonest live departure from the origin, if one was determinable
    pub next_departure: Option<NextDepartureResult>,

    /// Whether the live feed answered when the next departure was looked
    /// up. `false` with a null `next_departure` means the feed was
    /// unavailable, not that no service is running.
    pub live_feed_available: bool,
}

impl JourneyResponse {
    pub fn build(
        journey: &PlannedJourney,
        zones: Vec<u8>,
        geometry: &JourneyGeometry,
        next_departure: Option<NextDeparture>,
        live_feed_available: bool,
    ) -> Self {
        Self {
            origin: StopResult::from_stop(&journey.origin),
            destination: StopResult::from_stop(&journey.destination),
            requires_interchange: journey.requires_interchange(),
            interchange: journey.interchange().map(StopResult::from_stop),
            legs: journey.legs().iter().map(LegResult::from_leg).collect(),
            total_minutes: journey.total_minutes(),
            zones,
            geometry: GeometryResult::from_geometry(geometry),
            next_departure: next_departure
                .as_ref()
                .map(NextDepartureResult::from_departure),
            live_feed_available,
        }
    }
}

/// One service on a live departure board.
#[derive(Debug, Serialize)]
pub struct BoardEntry {
    /// Normalized destination label
    pub destination: String,

    /// Advertised wait string, as reported by the feed
    pub wait: String,
}

impl BoardEntry {
    pub fn from_service(service: &LiveService) -> Self {
        Self {
            destination: normalize_destination(&service.destination),
            wait: service.wait.clone(),
        }
    }
}

/// Response for a live departure board.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub stop: StopResult,
    pub services: Vec<BoardEntry>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

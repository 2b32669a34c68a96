//! Core planning error taxonomy.
//!
//! These errors are never retried inside the core; they fail fast and let
//! the caller decide. The web layer maps them onto HTTP statuses.

use thiserror::Error;

/// Errors from the journey-planning core.
#[derive(Debug, Clone, Error)]
pub enum PlanError {
    /// Empty identifier or misused endpoint; always a caller bug.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// No stop matches the supplied name or code.
    #[error("no stop matches identifier {0:?}")]
    StopNotFound(String),

    /// The named route has no timetable.
    #[error("no timetable for route {0:?}")]
    TimetableNotFound(String),

    /// The route's timetable has no entry for a stop.
    #[error("no timetable entry for stop {stop:?} on route {route:?}")]
    TimetableStopMissing { route: String, stop: String },

    /// An endpoint used in a traversal is absent from the named route.
    /// After interchange selection this indicates inconsistent route data,
    /// not a user error.
    #[error("stop {stop:?} is not on route {route:?}")]
    NotOnRoute { route: String, stop: String },

    /// No shared stop connects any origin route to any destination route.
    /// The hub-and-spoke topology means this should never happen with
    /// consistent network data.
    #[error("no interchange connects {origin:?} and {destination:?}")]
    NoInterchange { origin: String, destination: String },

    /// The route's polyline has no coordinate near a leg endpoint.
    #[error("route {0:?} has no line geometry near a journey endpoint")]
    MissingGeometry(String),
}

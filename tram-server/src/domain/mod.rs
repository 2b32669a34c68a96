//! Domain types for the tram journey planner.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity. Everything here is an immutable value snapshot; nothing in
//! the planning core mutates a stop, route or timetable after load.

mod error;
mod journey;
mod route;
mod stop;
mod timetable;
mod zone;

pub use error::PlanError;
pub use journey::{Leg, PlannedJourney};
pub use route::{Point, Route};
pub use stop::{InvalidStopCode, Stop, StopCode};
pub use timetable::{InvalidTimetableTime, Timetable, parse_hhmmss};
pub use zone::{FareZone, InvalidFareZone};

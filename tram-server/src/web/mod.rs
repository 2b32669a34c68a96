//! Web layer for the tram journey planner.
//!
//! Provides HTTP endpoints for planning journeys and reading live
//! departure boards.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

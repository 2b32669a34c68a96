//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::departures::{NextDeparture, identify_next};
use crate::domain::{PlanError, PlannedJourney};
use crate::fares::FareZoneResolver;
use crate::geometry;
use crate::resolve::StopResolver;
use crate::tfgm::TfgmError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/journey/plan", get(plan_journey))
        .route("/departures", get(departure_board))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a journey between two stops.
///
/// The response carries the legs, fare zones and polyline geometry, plus
/// the soonest live departure from the origin when the feed can supply
/// one. A live feed failure degrades to a journey without a departure,
/// not an error; `live_feed_available` lets clients tell "feed down,
/// retry later" apart from "no correctly-directed service known".
async fn plan_journey(
    State(state): State<AppState>,
    Query(req): Query<PlanJourneyRequest>,
) -> Result<Json<JourneyResponse>, AppError> {
    let journey = state.planner.plan(&req.origin, &req.destination)?;
    let zones = FareZoneResolver::zones_for_journey(&journey);
    let geometry = geometry::visualise(&journey)?;
    let (next_departure, live_feed_available) = next_departure_for(&state, &journey).await;

    Ok(Json(JourneyResponse::build(
        &journey,
        zones,
        &geometry,
        next_departure,
        live_feed_available,
    )))
}

/// Best-effort next departure for the journey's first leg, and whether
/// the live feed answered at all.
async fn next_departure_for(
    state: &AppState,
    journey: &PlannedJourney,
) -> (Option<NextDeparture>, bool) {
    let first = journey.first_leg();
    match state.live.departures(&[first.from.code]).await {
        Ok(services) => (
            identify_next(&first.from, &first.to, first.routes(), &services),
            true,
        ),
        Err(e) => {
            warn!(stop = %first.from.name, error = %e, "live feed unavailable, omitting next departure");
            (None, false)
        }
    }
}

/// Live departure board for a stop.
async fn departure_board(
    State(state): State<AppState>,
    Query(req): Query<DeparturesRequest>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let resolver = StopResolver::new(state.stops.as_ref());
    let stop = resolver.resolve(&req.stop)?;
    let services = state.live.departures(&[stop.code]).await?;

    Ok(Json(DeparturesResponse {
        stop: StopResult::from_stop(&stop),
        services: services.iter().map(BoardEntry::from_service).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidArgument(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::StopNotFound(_) | PlanError::NoInterchange { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<TfgmError> for AppError {
    fn from(e: TfgmError) -> Self {
        match e {
            TfgmError::RateLimited | TfgmError::ServiceUnavailable { .. } => {
                AppError::Unavailable {
                    message: e.to_string(),
                }
            }
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse {
            error: message.clone(),
        });
        (status, body).into_response()
    }
}

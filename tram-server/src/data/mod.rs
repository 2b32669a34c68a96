//! Static network fixture loading.
//!
//! Stops, routes and timetables live in JSON files loaded once at
//! startup into in-memory repositories. The loader owns the file
//! formats; the core only ever sees validated domain values.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domain::{FareZone, Point, Route, Stop, StopCode, Timetable, parse_hhmmss};
use crate::repository::{InMemoryRoutes, InMemoryStops};

/// Errors from loading the static network fixtures.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// A fixture file could not be read
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },

    /// A fixture file could not be parsed
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    /// A route references a stop code with no stop entry
    #[error("route {route:?} references unknown stop code {code:?}")]
    UnknownStop { route: String, code: String },
}

/// The loaded network snapshot.
pub struct NetworkData {
    pub stops: InMemoryStops,
    pub routes: InMemoryRoutes,
}

#[derive(Debug, Deserialize)]
struct StopFixture {
    code: String,
    name: String,
    latitude: f64,
    longitude: f64,
    zone: String,
}

#[derive(Debug, Deserialize)]
struct RouteFixture {
    name: String,
    color: String,
    stops: Vec<String>,
    polyline: Vec<[f64; 2]>,
}

/// Load stops.json, routes.json and timetables.json from a directory.
pub fn load_network(dir: impl AsRef<Path>) -> Result<NetworkData, FixtureError> {
    let dir = dir.as_ref();

    let stop_fixtures: Vec<StopFixture> = read_json(dir, "stops.json")?;
    let route_fixtures: Vec<RouteFixture> = read_json(dir, "routes.json")?;
    let timetable_fixtures: HashMap<String, HashMap<String, String>> =
        read_json(dir, "timetables.json")?;

    let stops = stop_fixtures
        .into_iter()
        .map(build_stop)
        .collect::<Result<Vec<Stop>, FixtureError>>()?;

    let routes = route_fixtures
        .into_iter()
        .map(|fixture| build_route(fixture, &stops).map(Arc::new))
        .collect::<Result<Vec<Arc<Route>>, FixtureError>>()?;

    let timetables = timetable_fixtures
        .into_iter()
        .map(|(route_name, entries)| build_timetable(route_name, entries))
        .collect::<Result<Vec<Timetable>, FixtureError>>()?;

    info!(
        stops = stops.len(),
        routes = routes.len(),
        timetables = timetables.len(),
        "loaded network fixtures"
    );

    Ok(NetworkData {
        stops: InMemoryStops::new(stops),
        routes: InMemoryRoutes::new(routes, timetables),
    })
}

fn read_json<T: serde::de::DeserializeOwned>(dir: &Path, file: &str) -> Result<T, FixtureError> {
    let path = dir.join(file);
    let body = std::fs::read_to_string(&path).map_err(|source| FixtureError::Io {
        file: file.to_string(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|e| FixtureError::Parse {
        file: file.to_string(),
        message: e.to_string(),
    })
}

fn build_stop(fixture: StopFixture) -> Result<Stop, FixtureError> {
    let code = StopCode::parse(&fixture.code).map_err(|e| FixtureError::Parse {
        file: "stops.json".to_string(),
        message: format!("stop {:?}: {e}", fixture.name),
    })?;
    let zone = fixture
        .zone
        .parse::<FareZone>()
        .map_err(|e| FixtureError::Parse {
            file: "stops.json".to_string(),
            message: format!("stop {:?}: {e}", fixture.name),
        })?;

    Ok(Stop {
        code,
        name: fixture.name,
        latitude: fixture.latitude,
        longitude: fixture.longitude,
        zone,
    })
}

fn build_route(fixture: RouteFixture, stops: &[Stop]) -> Result<Route, FixtureError> {
    let route_stops = fixture
        .stops
        .iter()
        .map(|code| {
            stops
                .iter()
                .find(|s| s.code.as_str() == code)
                .cloned()
                .ok_or_else(|| FixtureError::UnknownStop {
                    route: fixture.name.clone(),
                    code: code.clone(),
                })
        })
        .collect::<Result<Vec<Stop>, FixtureError>>()?;

    let polyline = fixture
        .polyline
        .iter()
        .map(|[lat, lng]| Point::new(*lat, *lng))
        .collect();

    Ok(Route {
        name: fixture.name,
        color: fixture.color,
        stops: route_stops,
        polyline,
    })
}

fn build_timetable(
    route_name: String,
    entries: HashMap<String, String>,
) -> Result<Timetable, FixtureError> {
    let times = entries
        .into_iter()
        .map(|(stop_name, time)| {
            parse_hhmmss(&time)
                .map(|t| (stop_name, t))
                .map_err(|e| FixtureError::Parse {
                    file: "timetables.json".to_string(),
                    message: format!("route {route_name:?}: {e}"),
                })
        })
        .collect::<Result<HashMap<_, _>, FixtureError>>()?;

    Ok(Timetable::new(route_name, times))
}

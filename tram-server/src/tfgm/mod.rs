//! TfGM Metrolinks live feed client.
//!
//! The feed reports, per passenger information display, up to four
//! upcoming trams as (destination text, wait minutes) pairs. Key
//! characteristics:
//! - destination text uses free-form "via" phrasing ("Bury via Market
//!   Street") that must be normalized before matching against stop names
//! - waits are strings of whole minutes
//! - a server error upstream means "temporarily unavailable, retry
//!   later", which is distinct from a stop simply having no data

mod client;
mod error;
mod mock;
mod types;

pub use client::{TfgmClient, TfgmConfig};
pub use error::TfgmError;
pub use mock::MockTfgmClient;
pub use types::{MetrolinkDeparture, MetrolinkResponse};

use crate::departures::LiveService;
use crate::domain::StopCode;

/// The live-feed source in use: the real API or canned mock data.
///
/// Chosen explicitly at construction from configuration, never from a
/// process-wide toggle.
#[derive(Debug, Clone)]
pub enum LiveSource {
    Api(TfgmClient),
    Mock(MockTfgmClient),
}

impl LiveSource {
    /// Fetch live departures for the given stops.
    pub async fn departures(&self, stop_codes: &[StopCode]) -> Result<Vec<LiveService>, TfgmError> {
        match self {
            LiveSource::Api(client) => client.departures(stop_codes).await,
            LiveSource::Mock(mock) => mock.departures(stop_codes).await,
        }
    }
}

//! Wire types for the TfGM Metrolinks OData feed.
//!
//! Each feed item describes one passenger information display at a stop,
//! with up to four upcoming trams flattened into numbered field groups
//! (`Dest0`/`Wait0` … `Dest3`/`Wait3`). Unused groups are empty strings.

use serde::Deserialize;
use tracing::warn;

use crate::departures::LiveService;
use crate::domain::StopCode;

/// Top-level OData response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct MetrolinkResponse {
    pub value: Vec<MetrolinkDeparture>,
}

/// One passenger information display's worth of departures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MetrolinkDeparture {
    /// Three-letter stop reference.
    #[serde(rename = "TLAREF")]
    pub tlaref: String,

    pub station_location: String,

    pub direction: String,

    pub dest0: String,
    pub wait0: String,
    pub status0: String,

    pub dest1: String,
    pub wait1: String,
    pub status1: String,

    pub dest2: String,
    pub wait2: String,
    pub status2: String,

    pub dest3: String,
    pub wait3: String,
    pub status3: String,

    pub message_board: String,

    pub last_updated: String,
}

impl MetrolinkDeparture {
    /// Flatten the numbered field groups into live services, dropping
    /// empty groups. Items with an unparseable stop reference are dropped
    /// with a warning rather than failing the whole board.
    pub fn to_live_services(&self) -> Vec<LiveService> {
        let Ok(source_code) = StopCode::parse_normalized(&self.tlaref) else {
            warn!(tlaref = %self.tlaref, "unparseable stop reference in feed item");
            return Vec::new();
        };

        let groups = [
            (&self.dest0, &self.wait0),
            (&self.dest1, &self.wait1),
            (&self.dest2, &self.wait2),
            (&self.dest3, &self.wait3),
        ];

        groups
            .into_iter()
            .filter(|(dest, _)| !dest.is_empty())
            .map(|(dest, wait)| LiveService {
                destination: dest.clone(),
                wait: wait.clone(),
                source_code,
            })
            .collect()
    }
}

//! Mock TfGM client for development and testing without API access.
//!
//! Loads canned feed responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use crate::departures::LiveService;
use crate::domain::StopCode;

use super::error::TfgmError;
use super::types::MetrolinkResponse;

/// Mock TfGM client that serves data from JSON files or constructed
/// services.
#[derive(Debug, Clone, Default)]
pub struct MockTfgmClient {
    /// Pre-loaded live services, keyed by source stop code.
    services: HashMap<StopCode, Vec<LiveService>>,
}

impl MockTfgmClient {
    /// Create a mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{CODE}.json` (e.g. `ALT.json`, `VIC.json`),
    /// each containing a feed response in wire format.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, TfgmError> {
        let data_dir = data_dir.as_ref();
        let mut services: HashMap<StopCode, Vec<LiveService>> = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| TfgmError::MockData {
            message: format!("failed to read mock data directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TfgmError::MockData {
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // Extract the stop code from the filename ("ALT.json" → ALT)
            let code_str = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| TfgmError::MockData {
                    message: format!("invalid filename: {path:?}"),
                })?;
            let code =
                StopCode::parse_normalized(code_str).map_err(|e| TfgmError::MockData {
                    message: format!("filename {path:?} is not a stop code: {e}"),
                })?;

            let body = std::fs::read_to_string(&path).map_err(|e| TfgmError::MockData {
                message: format!("failed to read {path:?}: {e}"),
            })?;
            let board: MetrolinkResponse =
                serde_json::from_str(&body).map_err(|e| TfgmError::Json {
                    message: format!("in {path:?}: {e}"),
                })?;

            services.insert(
                code,
                board
                    .value
                    .iter()
                    .flat_map(|item| item.to_live_services())
                    .collect(),
            );
        }

        Ok(Self { services })
    }

    /// Create a mock client from already-built live services, grouped by
    /// their source stop.
    pub fn with_services(all: Vec<LiveService>) -> Self {
        let mut services: HashMap<StopCode, Vec<LiveService>> = HashMap::new();
        for service in all {
            services.entry(service.source_code).or_default().push(service);
        }
        Self { services }
    }

    /// Serve the canned departures for the given stops. Stops with no
    /// canned data contribute nothing; they are not an error.
    pub async fn departures(&self, stop_codes: &[StopCode]) -> Result<Vec<LiveService>, TfgmError> {
        Ok(stop_codes
            .iter()
            .filter_map(|code| self.services.get(code))
            .flatten()
            .cloned()
            .collect())
    }
}

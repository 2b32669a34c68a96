//! Runtime configuration.
//!
//! Everything the binary needs from its environment is gathered here
//! once at startup and passed down explicitly; nothing below the
//! entrypoint reads environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Where live departure data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveMode {
    /// The real TfGM Metrolink feed.
    Api,

    /// Canned responses loaded from disk.
    Mock,
}

/// Errors from reading the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TRAM_BIND is not a valid socket address: {0}")]
    InvalidBindAddr(String),

    #[error("TRAM_LIVE_MODE must be \"api\" or \"mock\", got {0:?}")]
    InvalidLiveMode(String),
}

/// Startup configuration for the server binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// Directory holding stops.json, routes.json and timetables.json.
    pub data_dir: PathBuf,

    /// Which live departure source to construct.
    pub live_mode: LiveMode,

    /// TfGM API subscription key, required when `live_mode` is `Api`.
    pub tfgm_api_key: Option<String>,

    /// Directory of canned departure boards, used when `live_mode` is
    /// `Mock`.
    pub mock_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match std::env::var("TRAM_BIND") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            Err(_) => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let data_dir = std::env::var("TRAM_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let live_mode = match std::env::var("TRAM_LIVE_MODE") {
            Ok(raw) => match raw.as_str() {
                "api" => LiveMode::Api,
                "mock" => LiveMode::Mock,
                _ => return Err(ConfigError::InvalidLiveMode(raw)),
            },
            Err(_) => LiveMode::Api,
        };

        let tfgm_api_key = std::env::var("TFGM_API_KEY").ok();

        let mock_dir = std::env::var("TRAM_MOCK_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("mock-data"));

        Ok(Self {
            bind_addr,
            data_dir,
            live_mode,
            tfgm_api_key,
            mock_dir,
        })
    }
}

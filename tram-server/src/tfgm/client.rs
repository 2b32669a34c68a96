//! TfGM Metrolinks HTTP client.
//!
//! Provides async methods for querying the TfGM open data feed for live
//! tram departures. Handles authentication, concurrency limiting, and
//! flattening to [`LiveService`] values.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;

use crate::departures::LiveService;
use crate::domain::StopCode;

use super::error::TfgmError;
use super::types::MetrolinkResponse;

/// Default base URL for the TfGM open data API.
const DEFAULT_BASE_URL: &str = "https://api.tfgm.com/odata";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the TfGM client.
#[derive(Debug, Clone)]
pub struct TfgmConfig {
    /// Subscription key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production TfGM)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TfgmConfig {
    /// Create a new config with the given subscription key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// TfGM Metrolinks API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct TfgmClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl TfgmClient {
    /// Create a new TfGM client with the given configuration.
    pub fn new(config: TfgmConfig) -> Result<Self, TfgmError> {
        let mut headers = HeaderMap::new();

        // TfGM uses the APIM subscription-key header
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| TfgmError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert("Ocp-Apim-Subscription-Key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch live departures for a set of stops, fetched concurrently
    /// (bounded by the semaphore) and flattened into one list.
    pub async fn departures(&self, stop_codes: &[StopCode]) -> Result<Vec<LiveService>, TfgmError> {
        let boards = futures::future::try_join_all(
            stop_codes.iter().map(|code| self.departures_for(*code)),
        )
        .await?;

        Ok(boards.into_iter().flatten().collect())
    }

    /// Fetch live departures for a single stop.
    pub async fn departures_for(&self, stop_code: StopCode) -> Result<Vec<LiveService>, TfgmError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TfgmError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/Metrolinks", self.base_url);
        let filter = format!("TLAREF eq '{}'", stop_code.as_str());

        let response = self
            .http
            .get(&url)
            .query(&[("$filter", filter.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(TfgmError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TfgmError::RateLimited);
        }

        if status.is_server_error() {
            return Err(TfgmError::ServiceUnavailable {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TfgmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let board: MetrolinkResponse =
            serde_json::from_str(&body).map_err(|e| TfgmError::Json {
                message: format!("{e} (body: {})", body.chars().take(500).collect::<String>()),
            })?;

        Ok(board
            .value
            .iter()
            .flat_map(|item| item.to_live_services())
            .collect())
    }
}

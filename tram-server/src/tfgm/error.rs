//! TfGM client error types.

/// Errors from the TfGM live-service HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TfgmError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check TFGM_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by the TfGM API")]
    RateLimited,

    /// The upstream feed reported a server error. Distinct from "no
    /// data": callers should surface this as "try again shortly".
    #[error("live service feed unavailable (upstream status {status})")]
    ServiceUnavailable { status: u16 },

    /// API returned some other error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Mock data could not be loaded
    #[error("mock data error: {message}")]
    MockData { message: String },
}

//! Error types for stats backend and status API calls.

/// All errors that can occur talking to the stats backend or mcsrvstat.
///
/// The taxonomy is deliberately flat: a request either failed on the
/// wire, came back with a non-success status, or could not be decoded.
/// Callers convert these into a safe default or a visible-but-non-blocking
/// UI state; nothing is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The HTTP request failed (network, DNS, TLS, timeout).
    #[error("http request failed for {url}: {source}")]
    Http {
        /// The requested URL.
        url: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The backend rejected the configured API key.
    #[error("unauthorized for {url}: check STATS_API_KEY")]
    Unauthorized {
        /// The requested URL.
        url: String,
    },

    /// The server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        /// The requested URL.
        url: String,
        /// The returned status code.
        status: reqwest::StatusCode,
    },

    /// The response body could not be decoded as JSON.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The requested URL.
        url: String,
        /// The underlying decode error.
        source: reqwest::Error,
    },
}

/// Convenience alias for results in this crate.
pub type StatsResult<T> = Result<T, StatsError>;

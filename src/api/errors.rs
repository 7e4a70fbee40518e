/// Errors from the HTTP transport layer.
use thiserror::Error;

/// Typed errors from talking to the upstream API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed or cannot carry path segments.
    #[error("Invalid API base URL '{url}'")]
    InvalidBaseUrl {
        /// The rejected URL string.
        url: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, DNS, TLS, timeout, or body read failure.
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// The page URL that was being requested.
        url: String,
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status (other than 404, which ends pagination).
    #[error("API returned HTTP {status} for {url}")]
    Status {
        /// The page URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not have the `{ "results": [...] }` shape.
    #[error("Unexpected response body from {url}: {source}")]
    Decode {
        /// The page URL that was requested.
        url: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

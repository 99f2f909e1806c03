use reqwest::StatusCode;
use thiserror::Error;

/// Errors that stop a run of the CDN filter
#[derive(Error, Debug)]
pub enum CheckError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Reading the input list or writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The shared HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type for fatal operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors raised while loading a single range source.
///
/// These never end a run: the aggregator logs them and treats the source
/// as having published no ranges.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or no response arrived
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The response body could not be read
    #[error("Reading body of {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON document the format expects
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON document lacked the list holding the ranges
    #[error("Missing field `{0}` in response")]
    MissingField(String),
}

/// Result type for a single source fetch
pub type FetchResult<T> = Result<T, FetchError>;

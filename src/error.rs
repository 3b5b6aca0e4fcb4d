//! Error types for the BatteryIncluded adapter.
//!
//! Messages never contain the API key. Graceful-degradation cases
//! (bad identifier path, empty facets) are not errors; the steps log them
//! and return empty results instead.

/// Why an outbound request to BatteryIncluded failed.
#[derive(Debug, thiserror::Error)]
pub enum RequestFailure {
    /// Network error, timeout, or a body that could not be decoded.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("HTTP {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Required configuration is missing or blank.
    #[error("BatteryIncluded: configuration error: {0}")]
    Configuration(String),

    /// A single request attempt failed. `status` is set when the server
    /// responded at all.
    #[error("BatteryIncluded: request failed")]
    RequestFailed {
        status: Option<u16>,
        #[source]
        cause: RequestFailure,
    },
}

impl AdapterError {
    /// HTTP status of the failed request, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            AdapterError::RequestFailed { status, .. } => *status,
            AdapterError::Configuration(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;

//! Error types for the graph facade client.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while talking to the graph facade.
///
/// Transport, HTTP status, and decode failures stay distinct so callers can
/// tell a dead backend from a misbehaving one.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The request never produced an HTTP response.
    #[error("graph request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The facade answered with a non-success status.
    #[error("graph facade returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body was not the JSON shape the facade documents.
    #[error("could not decode graph response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The call exceeded the configured per-request timeout.
    #[error("graph request timed out after {0:?}")]
    Timeout(Duration),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, GraphError>;

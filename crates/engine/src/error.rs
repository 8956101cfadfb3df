//! Error types for the suggestion engine.

use graph_client::GraphError;
use serde_json::json;
use thiserror::Error;

/// Ways a suggestion run can fail.
///
/// The first two carry the numeric codes of the documented result contract;
/// `Transport` is outside that contract and carries the underlying graph
/// failure instead.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// None of the requested titles matched a movie in the graph.
    #[error("no movies matched the requested titles")]
    NoMatches,

    /// Every candidate actor's filmography was already on the group's list.
    #[error("every candidate actor's movies were already on the list")]
    Exhausted,

    /// A graph facade call failed or timed out.
    #[error("graph facade failure: {0}")]
    Transport(#[from] GraphError),
}

impl SuggestError {
    /// Numeric code from the documented result contract, if this failure
    /// has one.
    pub fn code(&self) -> Option<u8> {
        match self {
            SuggestError::NoMatches => Some(1),
            SuggestError::Exhausted => Some(2),
            SuggestError::Transport(_) => None,
        }
    }

    /// The `{"message", "error"}` failure payload for code-bearing failures.
    pub fn to_payload(&self) -> Option<serde_json::Value> {
        self.code().map(|code| {
            json!({
                "message": self.to_string(),
                "error": code,
            })
        })
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SuggestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_error_codes_match_the_contract() {
        assert_eq!(SuggestError::NoMatches.code(), Some(1));
        assert_eq!(SuggestError::Exhausted.code(), Some(2));
        assert_eq!(
            SuggestError::Transport(GraphError::Timeout(Duration::from_secs(1))).code(),
            None
        );
    }

    #[test]
    fn test_failure_payload_shape() {
        let payload = SuggestError::Exhausted.to_payload().unwrap();
        assert_eq!(payload["error"], 2);
        assert!(payload["message"].is_string());

        let transport = SuggestError::Transport(GraphError::Timeout(Duration::from_secs(1)));
        assert!(transport.to_payload().is_none());
    }
}

//! Error types for statsearch-core.
//!
//! Validation errors live next to the gate in [`crate::validation`]; this
//! module holds the errors produced while talking to the remote endpoint.

use thiserror::Error;

/// Errors that can occur while fetching search results.
///
/// `Clone` so a failure can travel through [`crate::workflow::SearchEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Endpoint is not a usable http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Connection, timeout or body transfer failed
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// Server answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),
    /// Body was not the expected `{ "items": [...] }` payload
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<FetchError> for String {
    fn from(err: FetchError) -> String {
        err.to_string()
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FetchError::HttpStatus(503).to_string(),
            "Unexpected HTTP status: 503"
        );
        assert_eq!(
            FetchError::RequestFailed("connection refused".into()).to_string(),
            "Request failed: connection refused"
        );
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}

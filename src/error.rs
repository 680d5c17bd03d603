//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Other(String),
}

/// Errors produced by a single GET + decode round trip.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed (status {status:?}): {reason}")]
    RequestFailed { status: Option<u16>, reason: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status carried by a failed request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            return FetchError::InvalidUrl(e.to_string());
        }
        FetchError::RequestFailed {
            status: e.status().map(|s| s.as_u16()),
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_on_request_failed() {
        let err = FetchError::RequestFailed {
            status: Some(503),
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(FetchError::InvalidUrl("::".to_string()).status(), None);
    }

    #[test]
    fn test_sdk_error_wraps_fetch_error() {
        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: SdkError = FetchError::from(decode).into();
        assert!(matches!(err, SdkError::Fetch(FetchError::Decode(_))));
        assert!(err.to_string().starts_with("Fetch error: Decode error:"));
    }
}

// src/core/error.rs

use thiserror::Error;

/// Why a candidate domain was refused before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid domain format")]
    InvalidFormat,

    #[error("unrecognized domain extension")]
    UnrecognizedSuffix,
}

/// Failure of a call to the scanning service.
///
/// Transport errors, non-success statuses and malformed payloads all end up
/// here. The message is kept for the logs; callers only need to know the
/// scan failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("server error: {0}")]
    Server(String),
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ScanError::Server(format!("connection failed: {}", err))
        } else if let Some(status) = err.status() {
            ScanError::Server(format!("unexpected status {}", status))
        } else {
            ScanError::Server(format!("request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::Server(format!("malformed payload: {}", err))
    }
}

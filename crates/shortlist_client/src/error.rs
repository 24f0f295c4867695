use std::fmt;

use thiserror::Error;

/// Error returned by every API operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiFailure,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    InvalidBaseUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::InvalidBaseUrl => write!(f, "invalid base url"),
            ApiFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ApiFailure::Timeout => write!(f, "timeout"),
            ApiFailure::Network => write!(f, "network error"),
            ApiFailure::Decode => write!(f, "decode error"),
        }
    }
}

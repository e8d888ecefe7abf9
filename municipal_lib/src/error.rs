//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation and form-state failures.
#[derive(Debug)]
pub enum MunicipalError {
    /// An error from the underlying API client.
    Api(municipal_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// A submission is already in flight for this form.
    Busy,
    /// The client configuration is unusable (e.g. a malformed base URL).
    Config(String),
}

impl MunicipalError {
    /// Text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for MunicipalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Busy => write!(f, "A request is already in progress"),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MunicipalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<municipal_api::Error> for MunicipalError {
    fn from(e: municipal_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for MunicipalError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

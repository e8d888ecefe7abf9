//! Error types for the API client.

/// Banner text used when a failed response carries no server message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch data";

/// Banner text used when no response was received at all.
pub const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the server. Check the connection and try again.";

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No response was received (connection refused, DNS failure, reset).
    #[error("Request failed")]
    RequestFailed,
    /// The request URL could not be built from the configured base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The API returned a non-success status with an `{error}` body.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The API returned a non-success status without a usable error body.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A success response whose body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// The single line shown to the user for this failure.
    ///
    /// Server-provided messages are passed through verbatim; every other
    /// failure maps to a fixed fallback.
    pub fn user_message(&self) -> String {
        self.user_message_or(GENERIC_FAILURE_MESSAGE)
    }

    /// Like [`Error::user_message`], with an endpoint-specific fallback.
    pub fn user_message_or(&self, fallback: &str) -> String {
        match self {
            Error::Server { message, .. } => message.clone(),
            Error::RequestFailed => NETWORK_FAILURE_MESSAGE.to_string(),
            Error::InvalidUrl(_) | Error::HttpStatus { .. } | Error::Decode(_) => {
                fallback.to_string()
            }
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } | Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! REST client errors.

use scrutiny_core::FailureReport;
use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credentials were rejected: a 401 from any route, or a 400 from login.
    #[error("authentication rejected: {message}")]
    Authentication {
        /// Server-supplied reason.
        message: String,
    },

    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("server returned {status}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// `error_message` from the body, if the body had one.
        message: Option<String>,
    },

    /// The request URL couldn't be built from the server identifier or name.
    #[error("invalid request URL: {url}")]
    InvalidUrl {
        /// The URL as far as it could be assembled.
        url: String,
    },

    /// A 2xx body didn't match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FailureReport for ApiError {
    fn server_message(&self) -> Option<&str> {
        match self {
            Self::Authentication { message } => Some(message),
            Self::Server { message, .. } => message.as_deref(),
            Self::Network(_) | Self::InvalidUrl { .. } | Self::Decode(_) => None,
        }
    }
}

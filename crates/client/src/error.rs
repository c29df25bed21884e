//! Marketplace API errors.

use thiserror::Error;

/// Errors that can occur when calling the marketplace API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with status 400 or above.
    ///
    /// Client and server errors are not distinguished; the status and raw
    /// body are carried as returned.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The bearer token cannot be sent as a header value.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// Cart creation succeeded but the response carried no usable cart ID.
    #[error("No cart id returned: {0}")]
    MissingCartId(String),
}

impl ApiError {
    /// HTTP status of an API failure, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! Client error types.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during client operations.
///
/// `MissingPartnerToken` and `Validation` are raised before any network
/// call; the remaining variants are outcomes of the dispatched request.
#[derive(Error, Debug)]
pub enum Error {
    #[error("partner token is not configured")]
    MissingPartnerToken,

    #[error("invalid parameter `{field}`: {message}")]
    Validation { field: String, message: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

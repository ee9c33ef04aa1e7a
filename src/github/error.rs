// Errors raised while talking to the GitHub REST API.
// Operations fold these into `FolioError::Fetch` before returning to callers.

use thiserror::Error;

use crate::http::HttpError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Undecodable content: {0}")]
    Content(String),

    #[error("Invalid request URL: {0}")]
    Url(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

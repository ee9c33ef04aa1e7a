// Error types for folio.
// Fetch failures surface to callers; README and front-matter failures never reach here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// Transport or upstream API failure for a profile, repository list,
    /// language, or rate-limit request.
    #[error("Failed to fetch {resource}: {message}")]
    Fetch {
        resource: &'static str,
        message: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolioError {
    pub fn fetch(resource: &'static str, err: impl std::fmt::Display) -> Self {
        FolioError::Fetch {
            resource,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

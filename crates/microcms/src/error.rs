use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request to the content API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Content API responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode content API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ContentError {
    /// The HTTP status reported by the content API, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ContentError::Status { status, .. } => Some(*status),
            ContentError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

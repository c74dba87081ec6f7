use thiserror::Error;

/// Errors that can occur during a transcription round-trip
#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transcription API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid segment: {0}")]
    InvalidSegment(String),
}

pub type Result<T> = std::result::Result<T, TranscribeError>;

impl From<TranscribeError> for clipscribe_core::ClipError {
    fn from(err: TranscribeError) -> Self {
        clipscribe_core::ClipError::transcription(err.to_string())
    }
}

/// Core error types for Clipscribe
use thiserror::Error;

/// Result type alias using `ClipError`
pub type Result<T> = std::result::Result<T, ClipError>;

/// Core error type for Clipscribe
#[derive(Error, Debug)]
pub enum ClipError {
    /// The requested time range yields zero or negative frames
    #[error("Invalid time range: {start}s..{end}s yields no samples")]
    InvalidRange {
        /// Requested range start in seconds
        start: f64,
        /// Requested range end in seconds
        end: f64,
    },

    /// A sample buffer violated its structural invariants
    #[error("Invalid sample buffer: {0}")]
    InvalidBuffer(String),

    /// Audio decoding errors
    #[error("Decode error: {0}")]
    Decode(String),

    /// Transcription collaborator errors
    #[error("Transcription error: {0}")]
    Transcription(String),

    /// Playback errors
    #[error("Playback error: {0}")]
    Playback(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl ClipError {
    /// Create an invalid-range error
    pub fn invalid_range(start: f64, end: f64) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Create an invalid-buffer error
    pub fn invalid_buffer(msg: impl Into<String>) -> Self {
        Self::InvalidBuffer(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a transcription error
    pub fn transcription(msg: impl Into<String>) -> Self {
        Self::Transcription(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

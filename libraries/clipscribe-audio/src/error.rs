/// Audio-specific errors
use thiserror::Error;

/// Result type alias using `AudioError`
pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio error types
#[derive(Error, Debug)]
pub enum AudioError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Requested sample range is empty
    #[error("Invalid range: {start}s..{end}s yields no samples")]
    InvalidRange {
        /// Range start in seconds
        start: f64,
        /// Range end in seconds
        end: f64,
    },

    /// Waveform width must be positive
    #[error("Invalid waveform width: {0}")]
    InvalidWidth(usize),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Symphonia error
    #[error("Symphonia error: {0}")]
    Symphonia(String),
}

impl From<AudioError> for clipscribe_core::ClipError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::InvalidRange { start, end } => {
                clipscribe_core::ClipError::InvalidRange { start, end }
            }
            other => clipscribe_core::ClipError::decode(other.to_string()),
        }
    }
}

/// Core traits for Clipscribe
use crate::error::Result;
use crate::types::{SampleBuffer, TranscriptSegment};
use std::path::Path;

/// Audio decoder trait
///
/// Implementers decode audio files into planar `SampleBuffer` form. The
/// editing session treats decoding as an external collaborator: a failed
/// decode propagates unchanged and the session shows an error state.
pub trait AudioDecoder: Send {
    /// Decode an audio file from the given path (loads entire file)
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded
    fn decode(&mut self, path: &Path) -> Result<SampleBuffer>;

    /// Check if the decoder supports the given file format
    fn supports_format(&self, path: &Path) -> bool;
}

/// Transcription collaborator trait
///
/// Implementers turn raw audio bytes into ordered, timed transcript
/// segments. The collaborator is a fallible black box: network errors,
/// quota errors, and malformed responses all surface as a single
/// transcription error with no partial results.
#[allow(async_fn_in_trait)]
pub trait Transcriber: Send + Sync {
    /// Transcribe raw audio bytes with the given MIME type
    ///
    /// # Errors
    /// Returns an error on transport failure or an invalid response
    async fn transcribe(&self, audio: &[u8], mime_type: &str) -> Result<Vec<TranscriptSegment>>;
}

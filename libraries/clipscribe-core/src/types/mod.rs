/// Core domain types for Clipscribe
mod audio;
mod transcript;

pub use audio::{SampleBuffer, SampleRate};
pub use transcript::{Selection, TimeRange, TranscriptSegment};

//! Clipscribe Core
//!
//! Platform-agnostic core types, traits, and error handling for Clipscribe.
//!
//! This crate provides the foundational building blocks shared by the audio,
//! transcription, and session crates:
//! - **Domain Types**: `SampleBuffer`, `TimeRange`, `TranscriptSegment`, `Selection`
//! - **Collaborator Traits**: `AudioDecoder`, `Transcriber`
//! - **Error Handling**: Unified `ClipError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use clipscribe_core::{Selection, TranscriptSegment};
//!
//! let segments = vec![
//!     TranscriptSegment { id: 0, text: "hello".into(), start: 0.0, end: 1.2 },
//!     TranscriptSegment { id: 1, text: "world".into(), start: 1.2, end: 2.5 },
//! ];
//!
//! let selection = Selection::empty().toggled(0).toggled(1);
//! let range = selection.time_range(&segments).unwrap();
//! assert_eq!(range.start, 0.0);
//! assert_eq!(range.end, 2.5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{ClipError, Result};
pub use traits::{AudioDecoder, Transcriber};
pub use types::{SampleBuffer, SampleRate, Selection, TimeRange, TranscriptSegment};

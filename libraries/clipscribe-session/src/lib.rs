//! Clipscribe Session
//!
//! Editing-session orchestration for Clipscribe: owns the decoded audio and
//! its transcript, tracks the segment selection, produces WAV clips, and
//! runs the single-active playback transport.
//!
//! # Example
//!
//! ```rust
//! use clipscribe_core::{SampleBuffer, SampleRate, TranscriptSegment};
//! use clipscribe_session::EditingSession;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let buffer = SampleBuffer::silent(SampleRate::SPEECH, 1, 48_000)?;
//! let segments = vec![TranscriptSegment {
//!     id: 0,
//!     text: "hello there".into(),
//!     start: 0.4,
//!     end: 1.9,
//! }];
//!
//! let mut session = EditingSession::new(buffer, segments);
//! session.toggle_segment(0);
//!
//! let clip = session.extract_clip()?;
//! assert_eq!(clip.file_name, "clip_0:00.40-0:01.90.wav");
//! # Ok(())
//! # }
//! ```

mod clip;
mod error;
mod playback;
mod session;

// Public exports
pub use clip::{clip_file_name, Clip};
pub use error::{Result, SessionError};
pub use playback::{Playback, PlaybackHandle};
pub use session::{EditingSession, SessionState};

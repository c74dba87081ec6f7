//! Clipscribe Transcription
//!
//! Async client for the generative-AI transcription API Clipscribe uses to
//! turn audio into timed transcript segments, plus the validation layer
//! that refuses to trust the API's output shape blindly.

mod client;
mod error;
mod validate;

// Public exports
pub use client::TranscriptionClient;
pub use error::{Result, TranscribeError};
pub use validate::validate_segments;

//! Clipscribe Audio
//!
//! Audio decoding, clip extraction, WAV encoding, and waveform downsampling
//! for Clipscribe.
//!
//! This crate provides:
//! - Audio decoding via Symphonia (MP3, FLAC, OGG, WAV, AAC, OPUS)
//! - Sample-range extraction over a decoded buffer
//! - A minimal 16-bit PCM WAV encoder
//! - Min/max waveform downsampling and pixel/time mapping
//!
//! # Example: Extracting and Encoding a Clip
//!
//! ```rust
//! use clipscribe_audio::{extract, encode_wav};
//! use clipscribe_core::{SampleBuffer, SampleRate};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let buffer = SampleBuffer::silent(SampleRate::CD_QUALITY, 1, 88_200)?;
//!
//! // Pull out [0.5s, 1.0s) and encode it as a standalone WAV
//! let clip = extract(&buffer, 0.5, 1.0)?;
//! let bytes = encode_wav(&clip);
//!
//! assert_eq!(bytes.len(), 44 + 22_050 * 2);
//! # Ok(())
//! # }
//! ```

mod decoder;
mod error;
mod extract;
mod wav;
mod waveform;

pub use decoder::SymphoniaDecoder;
pub use error::{AudioError, Result};
pub use extract::extract;
pub use wav::{encode_wav, HEADER_LEN};
pub use waveform::{downsample, pixel_to_time, time_to_pixel, WaveformBin};

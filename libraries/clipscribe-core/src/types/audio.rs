/// Audio-related types
use serde::{Deserialize, Serialize};

use crate::error::{ClipError, Result};

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// Common sample rates
    pub const CD_QUALITY: Self = Self(44_100);
    pub const DVD_QUALITY: Self = Self(48_000);
    pub const SPEECH: Self = Self(16_000);
    pub const TELEPHONE: Self = Self(8_000);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }
}

/// Decoded audio held as planar channels
///
/// Samples are f32 with a nominal range of [-1.0, 1.0]. Values may
/// transiently exceed that range (intersample peaks); the WAV encoder clamps
/// on output. Every channel holds the same number of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: SampleRate,
    channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    /// Create a new sample buffer, validating its structural invariants
    pub fn new(sample_rate: SampleRate, channels: Vec<Vec<f32>>) -> Result<Self> {
        if sample_rate.as_hz() == 0 {
            return Err(ClipError::invalid_buffer("sample rate must be positive"));
        }
        if channels.is_empty() {
            return Err(ClipError::invalid_buffer("at least one channel required"));
        }
        let frames = channels[0].len();
        if channels.iter().any(|c| c.len() != frames) {
            return Err(ClipError::invalid_buffer(format!(
                "channel lengths differ (expected {frames} frames)"
            )));
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Create a silent buffer with the given shape
    pub fn silent(sample_rate: SampleRate, channel_count: usize, frames: usize) -> Result<Self> {
        Self::new(sample_rate, vec![vec![0.0; frames]; channel_count])
    }

    /// Sample rate of the buffer
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / f64::from(self.sample_rate.as_hz())
    }

    /// Check if the buffer holds no frames
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Samples of a single channel
    ///
    /// # Panics
    /// Panics if `index >= channel_count()`.
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    /// All channels in order
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }
}

//! Waveform downsampling and pixel/time mapping
//!
//! Reduces a channel to one (min, max) amplitude pair per pixel column for
//! envelope rendering, and maps between pixel coordinates and playback time
//! for click-to-seek and selection overlays.

use crate::error::{AudioError, Result};
use clipscribe_core::SampleBuffer;

/// Amplitude extrema of one pixel column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformBin {
    /// Minimum sample in the column's group
    pub min: f32,
    /// Maximum sample in the column's group
    pub max: f32,
}

impl WaveformBin {
    /// Sentinel for a group with no samples (inverted, so renderers draw nothing)
    pub const EMPTY: Self = Self {
        min: 1.0,
        max: -1.0,
    };
}

/// Downsample the first channel into `pixel_width` min/max bins
///
/// Samples are partitioned into `pixel_width` contiguous groups of
/// `ceil(frames / pixel_width)` samples; the trailing groups may be shorter
/// or empty, and empty groups yield `WaveformBin::EMPTY`. Only channel 0 is
/// used regardless of channel count.
///
/// # Errors
/// Returns `AudioError::InvalidWidth` when `pixel_width` is zero.
pub fn downsample(buffer: &SampleBuffer, pixel_width: usize) -> Result<Vec<WaveformBin>> {
    if pixel_width == 0 {
        return Err(AudioError::InvalidWidth(pixel_width));
    }

    let samples = buffer.channel(0);
    let frames = samples.len();
    if frames == 0 {
        return Ok(vec![WaveformBin::EMPTY; pixel_width]);
    }

    let group_size = frames.div_ceil(pixel_width);
    let mut bins = Vec::with_capacity(pixel_width);
    for group in samples.chunks(group_size) {
        let mut bin = WaveformBin::EMPTY;
        for &s in group {
            bin.min = bin.min.min(s);
            bin.max = bin.max.max(s);
        }
        bins.push(bin);
    }
    // chunks() never yields empty groups; tail columns past the last sample
    // get the sentinel
    bins.resize(pixel_width, WaveformBin::EMPTY);
    Ok(bins)
}

/// Map a playback time to a (fractional) pixel column
///
/// A non-positive duration or zero width maps everything to column 0
/// rather than producing NaN (an empty buffer has nowhere to point).
pub fn time_to_pixel(time: f64, total_duration: f64, pixel_width: usize) -> f64 {
    if total_duration <= 0.0 || pixel_width == 0 {
        return 0.0;
    }
    (time / total_duration) * pixel_width as f64
}

/// Map a (fractional) pixel column back to playback time
///
/// A non-positive duration or zero width maps every column to time 0.
pub fn pixel_to_time(pixel: f64, total_duration: f64, pixel_width: usize) -> f64 {
    if total_duration <= 0.0 || pixel_width == 0 {
        return 0.0;
    }
    (pixel / pixel_width as f64) * total_duration
}

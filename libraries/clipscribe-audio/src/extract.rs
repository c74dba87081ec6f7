//! Sample-range extraction
//!
//! Copies a [start, end) time range out of a decoded buffer into a new,
//! independently owned buffer with the same rate and channel layout.

use crate::error::{AudioError, Result};
use clipscribe_core::SampleBuffer;

/// Extract the sample range `[start_time, end_time)` seconds from `buffer`
///
/// Frame indices are `floor(time * sample_rate)` on both ends, so the output
/// always holds exactly `floor(end * rate) - floor(start * rate)` frames. If
/// the end index runs past the source tail (float rounding near the end of
/// the file), the missing frames stay at zero instead of failing.
///
/// # Errors
/// Returns `AudioError::InvalidRange` when `start_time` is negative or the
/// computed frame count is zero or negative.
pub fn extract(buffer: &SampleBuffer, start_time: f64, end_time: f64) -> Result<SampleBuffer> {
    let rate = f64::from(buffer.sample_rate().as_hz());
    let start_sample = (start_time * rate).floor() as i64;
    let end_sample = (end_time * rate).floor() as i64;

    if start_time < 0.0 || end_sample <= start_sample {
        return Err(AudioError::InvalidRange {
            start: start_time,
            end: end_time,
        });
    }

    let start_sample = start_sample as usize;
    let frames = (end_sample as usize) - start_sample;
    let available = buffer.frame_count();

    let channels = buffer
        .channels()
        .iter()
        .map(|channel| {
            let mut out = vec![0.0f32; frames];
            if start_sample < available {
                let copy_end = (start_sample + frames).min(available);
                let copied = copy_end - start_sample;
                out[..copied].copy_from_slice(&channel[start_sample..copy_end]);
            }
            out
        })
        .collect();

    tracing::debug!(
        start_time,
        end_time,
        frames,
        channels = buffer.channel_count(),
        "extracted sample range"
    );

    // Shape is valid by construction; new() re-checks the invariants anyway
    SampleBuffer::new(buffer.sample_rate(), channels).map_err(|_| AudioError::InvalidRange {
        start: start_time,
        end: end_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipscribe_core::SampleRate;

    fn ramp_buffer(rate: u32, frames: usize, channels: usize) -> SampleBuffer {
        let data = (0..channels)
            .map(|c| {
                (0..frames)
                    .map(|i| (i as f32 + c as f32 * 0.001) / frames as f32)
                    .collect()
            })
            .collect();
        SampleBuffer::new(SampleRate::new(rate), data).unwrap()
    }

    #[test]
    fn extracts_expected_frame_count() {
        let buffer = ramp_buffer(8_000, 8_000, 2);
        let clip = extract(&buffer, 0.25, 0.75).unwrap();
        assert_eq!(clip.frame_count(), 4_000);
        assert_eq!(clip.channel_count(), 2);
        assert_eq!(clip.sample_rate(), buffer.sample_rate());
    }

    #[test]
    fn copies_the_right_samples() {
        let buffer = ramp_buffer(1_000, 1_000, 1);
        let clip = extract(&buffer, 0.1, 0.2).unwrap();
        assert_eq!(clip.channel(0)[0], buffer.channel(0)[100]);
        assert_eq!(clip.channel(0)[99], buffer.channel(0)[199]);
    }

    #[test]
    fn pads_past_the_tail_with_silence() {
        let buffer = ramp_buffer(1_000, 500, 1);
        // Source holds 0.5s; ask for [0.4, 0.7)
        let clip = extract(&buffer, 0.4, 0.7).unwrap();
        assert_eq!(clip.frame_count(), 300);
        assert_eq!(clip.channel(0)[99], buffer.channel(0)[499]);
        assert!(clip.channel(0)[100..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn range_entirely_past_the_tail_is_silence() {
        let buffer = ramp_buffer(1_000, 100, 1);
        let clip = extract(&buffer, 5.0, 6.0).unwrap();
        assert_eq!(clip.frame_count(), 1_000);
        assert!(clip.channel(0).iter().all(|&s| s == 0.0));
    }

    #[test]
    fn inverted_or_empty_range_is_rejected() {
        let buffer = ramp_buffer(8_000, 8_000, 1);
        assert!(matches!(
            extract(&buffer, 0.5, 0.5),
            Err(AudioError::InvalidRange { .. })
        ));
        assert!(matches!(
            extract(&buffer, 0.7, 0.2),
            Err(AudioError::InvalidRange { .. })
        ));
        assert!(matches!(
            extract(&buffer, -0.1, 0.2),
            Err(AudioError::InvalidRange { .. })
        ));
    }

    #[test]
    fn sub_sample_range_is_rejected() {
        // At 10 Hz a 20 ms range rounds to zero frames
        let buffer = ramp_buffer(10, 100, 1);
        assert!(matches!(
            extract(&buffer, 0.50, 0.52),
            Err(AudioError::InvalidRange { .. })
        ));
    }
}

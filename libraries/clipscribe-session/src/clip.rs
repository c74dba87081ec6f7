//! Extracted clip artifact and file naming

use clipscribe_core::TimeRange;

/// A finished clip, ready to hand to the caller as a downloadable file
///
/// The intermediate extracted sample buffer is dropped once the bytes are
/// encoded; only the serialized WAV survives.
#[derive(Debug, Clone)]
pub struct Clip {
    /// Complete WAV file bytes
    pub bytes: Vec<u8>,
    /// The time range the clip covers in the source audio
    pub range: TimeRange,
    /// Suggested file name, `clip_<start>-<end>.wav`
    pub file_name: String,
}

/// Format a clip file name for a time range
///
/// Times render as `minutes:seconds.hundredths` with seconds and hundredths
/// zero-padded, e.g. `clip_0:05.30-0:12.00.wav`.
pub fn clip_file_name(range: TimeRange) -> String {
    format!(
        "clip_{}-{}.wav",
        format_timestamp(range.start),
        format_timestamp(range.end)
    )
}

fn format_timestamp(seconds: f64) -> String {
    let total_hundredths = (seconds * 100.0).round() as u64;
    let minutes = total_hundredths / 6_000;
    let secs = (total_hundredths % 6_000) / 100;
    let hundredths = total_hundredths % 100;
    format!("{minutes}:{secs:02}.{hundredths:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_spec_example() {
        let range = TimeRange::new(5.3, 12.0).unwrap();
        assert_eq!(clip_file_name(range), "clip_0:05.30-0:12.00.wav");
    }

    #[test]
    fn zero_pads_seconds_and_hundredths() {
        assert_eq!(format_timestamp(0.0), "0:00.00");
        assert_eq!(format_timestamp(9.05), "0:09.05");
        assert_eq!(format_timestamp(61.5), "1:01.50");
    }

    #[test]
    fn minutes_are_not_padded() {
        assert_eq!(format_timestamp(754.32), "12:34.32");
    }

    #[test]
    fn rounding_carries_into_seconds() {
        // 59.999s rounds up to a full minute
        assert_eq!(format_timestamp(59.999), "1:00.00");
    }
}

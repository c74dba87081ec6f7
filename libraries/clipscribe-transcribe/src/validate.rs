//! Transcript segment validation
//!
//! The transcription API promises strict JSON but nothing enforces the
//! contract, so every segment is checked before the session trusts it. One
//! bad segment fails the whole response; there is no partial-result
//! recovery.

use crate::error::{Result, TranscribeError};
use clipscribe_core::TranscriptSegment;

/// Validate an ordered list of segments as returned by the API
///
/// Requires non-empty text, `0 <= start < end`, and strictly increasing ids.
///
/// # Errors
/// Returns `TranscribeError::InvalidSegment` naming the first violation.
pub fn validate_segments(segments: &[TranscriptSegment]) -> Result<()> {
    let mut last_id: Option<u64> = None;
    for segment in segments {
        if segment.text.trim().is_empty() {
            return Err(TranscribeError::InvalidSegment(format!(
                "segment {} has empty text",
                segment.id
            )));
        }
        if segment.start < 0.0 || !segment.start.is_finite() || !segment.end.is_finite() {
            return Err(TranscribeError::InvalidSegment(format!(
                "segment {} has invalid start {}",
                segment.id, segment.start
            )));
        }
        if segment.end <= segment.start {
            return Err(TranscribeError::InvalidSegment(format!(
                "segment {} has start {} >= end {}",
                segment.id, segment.start, segment.end
            )));
        }
        if let Some(prev) = last_id {
            if segment.id <= prev {
                return Err(TranscribeError::InvalidSegment(format!(
                    "segment ids not monotonic: {} after {}",
                    segment.id, prev
                )));
            }
        }
        last_id = Some(segment.id);
    }
    Ok(())
}

//! Editing session
//!
//! Owns the decoded sample buffer and the immutable transcript for one
//! loaded file, tracks the current segment selection, and produces clips.

use clipscribe_audio::{downsample, encode_wav, extract, WaveformBin};
use clipscribe_core::{SampleBuffer, Selection, TimeRange, TranscriptSegment};

use crate::clip::{clip_file_name, Clip};
use crate::error::{Result, SessionError};

/// User-visible session state
///
/// A failed decode or transcription puts the session here; retrying the
/// action starts again from a clean state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Ready for editing
    #[default]
    Ready,
    /// The last action failed with a user-visible message
    Failed(String),
}

/// An editing session over one decoded audio file
///
/// The session owns the decoded buffer for its lifetime; it is created from
/// a successful decode and discarded when a new file is loaded. The
/// transcript is immutable once set. The selection is an immutable value
/// rebuilt on every toggle.
#[derive(Debug)]
pub struct EditingSession {
    buffer: SampleBuffer,
    segments: Vec<TranscriptSegment>,
    selection: Selection,
    state: SessionState,
}

impl EditingSession {
    /// Create a session from a decoded buffer and its transcript
    pub fn new(buffer: SampleBuffer, segments: Vec<TranscriptSegment>) -> Self {
        Self {
            buffer,
            segments,
            selection: Selection::empty(),
            state: SessionState::Ready,
        }
    }

    /// The decoded audio
    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// The transcript, in segment order
    pub fn segments(&self) -> &[TranscriptSegment] {
        &self.segments
    }

    /// Total duration of the loaded audio in seconds
    pub fn duration_secs(&self) -> f64 {
        self.buffer.duration_secs()
    }

    /// The current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Record a failed action as a user-visible error state
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = SessionState::Failed(message.into());
    }

    /// Return to a clean state so the action can be retried
    pub fn clear_error(&mut self) {
        self.state = SessionState::Ready;
    }

    /// Toggle a segment in or out of the selection
    ///
    /// The selection is replaced wholesale, never mutated in place.
    pub fn toggle_segment(&mut self, id: u64) {
        self.selection = self.selection.toggled(id);
    }

    /// Drop the whole selection
    pub fn clear_selection(&mut self) {
        self.selection = Selection::empty();
    }

    /// Time range spanned by the current selection
    ///
    /// Recomputed from scratch whenever asked; `None` when nothing is
    /// selected.
    pub fn selected_range(&self) -> Option<TimeRange> {
        self.selection.time_range(&self.segments)
    }

    /// Extract the selected range as a finished WAV clip
    ///
    /// The intermediate sample buffer is dropped after encoding; only the
    /// serialized bytes are kept.
    ///
    /// # Errors
    /// `SessionError::NoSelection` when nothing is selected, or the
    /// extractor's error when the derived range yields no samples.
    pub fn extract_clip(&self) -> Result<Clip> {
        let range = self.selected_range().ok_or(SessionError::NoSelection)?;
        let extracted = extract(&self.buffer, range.start, range.end)?;
        let bytes = encode_wav(&extracted);
        let file_name = clip_file_name(range);

        tracing::debug!(
            start = range.start,
            end = range.end,
            bytes = bytes.len(),
            file_name,
            "extracted clip"
        );

        Ok(Clip {
            bytes,
            range,
            file_name,
        })
    }

    /// Waveform envelope of the loaded audio at the given pixel width
    pub fn waveform(&self, pixel_width: usize) -> Result<Vec<WaveformBin>> {
        Ok(downsample(&self.buffer, pixel_width)?)
    }
}

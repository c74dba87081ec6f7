/// Transcript and selection types
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ClipError, Result};

/// A timed piece of transcribed text
///
/// Produced once by the transcription collaborator and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Stable, order-significant identifier
    pub id: u64,
    /// Transcribed text, non-empty
    pub text: String,
    /// Segment start in seconds
    pub start: f64,
    /// Segment end in seconds, greater than `start`
    pub end: f64,
}

/// A half-open time range in seconds
///
/// Derived from the current selection, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Range start in seconds
    pub start: f64,
    /// Range end in seconds
    pub end: f64,
}

impl TimeRange {
    /// Create a time range, requiring `0 <= start < end`
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if start < 0.0 || end <= start {
            return Err(ClipError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// An immutable set of selected transcript segment ids
///
/// Rebuilt from scratch on every user interaction rather than mutated in
/// place, so there is no hidden state to drift.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<u64>,
}

impl Selection {
    /// The empty selection
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a selection from an id iterator
    pub fn from_ids(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Return a new selection with `id` toggled
    #[must_use]
    pub fn toggled(&self, id: u64) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Self { ids }
    }

    /// Whether `id` is selected
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected segments
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over selected ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }

    /// Time range spanned by the selected segments
    ///
    /// Spans from the earliest selected start to the latest selected end.
    /// Returns `None` when the selection is empty or matches no segment.
    pub fn time_range(&self, segments: &[TranscriptSegment]) -> Option<TimeRange> {
        let mut range: Option<(f64, f64)> = None;
        for segment in segments.iter().filter(|s| self.ids.contains(&s.id)) {
            range = Some(match range {
                None => (segment.start, segment.end),
                Some((start, end)) => (start.min(segment.start), end.max(segment.end)),
            });
        }
        range.map(|(start, end)| TimeRange { start, end })
    }
}

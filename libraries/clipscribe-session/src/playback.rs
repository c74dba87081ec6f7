//! Playback transport
//!
//! A single active playback handle at a time: starting playback tears down
//! the previous handle (stop, discard) before creating the next. The handle
//! is advanced by the caller's periodic tick rather than a thread of its
//! own; stopping is stop-and-discard via an atomic flag checked each tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clipscribe_core::TimeRange;

/// One live playback of a time range
#[derive(Debug)]
pub struct PlaybackHandle {
    range: TimeRange,
    position: f64,
    stopped: Arc<AtomicBool>,
}

impl PlaybackHandle {
    fn new(range: TimeRange) -> Self {
        Self {
            range,
            position: range.start,
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Advance the playhead by `elapsed_secs`
    ///
    /// Returns `false` once the handle is stopped or the range end is
    /// reached; the caller should then discard the handle.
    pub fn tick(&mut self, elapsed_secs: f64) -> bool {
        if self.stopped.load(Ordering::Acquire) {
            return false;
        }
        self.position = (self.position + elapsed_secs).min(self.range.end);
        if self.position >= self.range.end {
            self.stopped.store(true, Ordering::Release);
            return false;
        }
        true
    }

    /// Request a stop; takes effect on the next tick
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// A flag the audio callback can poll without borrowing the handle
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stopped)
    }

    /// Whether the handle has been stopped or finished
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Current playhead position in seconds
    pub fn position_secs(&self) -> f64 {
        self.position
    }

    /// The range being played
    pub fn range(&self) -> TimeRange {
        self.range
    }
}

/// Playback transport owning at most one active handle
#[derive(Debug, Default)]
pub struct Playback {
    active: Option<PlaybackHandle>,
}

impl Playback {
    /// Create an idle transport
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing `range`, tearing down any previous handle first
    pub fn start(&mut self, range: TimeRange) -> &mut PlaybackHandle {
        if let Some(previous) = self.active.take() {
            previous.stop();
            tracing::debug!("discarded previous playback handle");
        }
        self.active.insert(PlaybackHandle::new(range))
    }

    /// Stop and discard the active handle, if any
    pub fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.stop();
        }
    }

    /// The active handle, if one exists
    pub fn active(&mut self) -> Option<&mut PlaybackHandle> {
        self.active.as_mut()
    }

    /// Whether a handle is live
    pub fn is_playing(&self) -> bool {
        self.active.as_ref().is_some_and(|h| !h.is_stopped())
    }
}

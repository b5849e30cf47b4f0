use std::time::{Duration, Instant};

use crate::Cadence;

/// Applies a [`Cadence`] to a stream of snapshots.
#[derive(Debug)]
pub(crate) struct Pacer {
    cadence: Cadence,
    last_paint: Option<Instant>,
    frames: usize,
}

impl Pacer {
    pub(crate) fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            last_paint: None,
            frames: 0,
        }
    }

    /// Whether a snapshot arriving at `now` should be painted.
    pub(crate) fn should_paint(&self, now: Instant) -> bool {
        match self.cadence {
            Cadence::EverySnapshot { .. } => true,
            Cadence::Throttled { min_interval } => self
                .last_paint
                .map_or(true, |last| now.saturating_duration_since(last) >= min_interval),
        }
    }

    /// Records a paint at `now` and returns how long to hold the frame before moving on.
    pub(crate) fn painted(&mut self, now: Instant) -> Duration {
        self.last_paint = Some(now);
        self.frames += 1;
        match self.cadence {
            Cadence::EverySnapshot { delay } => delay,
            Cadence::Throttled { .. } => Duration::ZERO,
        }
    }

    /// Snapshots painted so far.
    pub(crate) fn frames(&self) -> usize {
        self.frames
    }
}

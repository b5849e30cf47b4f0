use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortvis_orst::{Algorithm, Result};

use crate::generate::{check_size, Condition};

/// When snapshots get painted.
///
/// Whatever the cadence, every snapshot updates the playback state in the order it was emitted.
/// The cadence only decides which of them are also handed to the renderer. The final frame of a
/// run is always painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Paint every snapshot and wait `delay` after each one.
    EverySnapshot { delay: Duration },
    /// Paint a snapshot only if at least `min_interval` has passed since the last paint.
    Throttled { min_interval: Duration },
}

impl Default for Cadence {
    fn default() -> Self {
        Cadence::EverySnapshot {
            delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub cadence: Cadence,
    /// How long the unsorted array stays on screen before the algorithm starts.
    pub lead_in: Duration,
    /// Seed for shuffling. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl PlaybackConfig {
    /// A default configuration whose random arrays are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn with_lead_in(mut self, lead_in: Duration) -> Self {
        self.lead_in = lead_in;
        self
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Everything needed to start a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRequest {
    pub algorithm: Algorithm,
    pub size: usize,
    pub condition: Condition,
}

impl RunRequest {
    pub fn new(algorithm: Algorithm, size: usize, condition: Condition) -> Self {
        Self {
            algorithm,
            size,
            condition,
        }
    }

    /// Builds a request from an algorithm name such as `"bubbleSort"`.
    ///
    /// ```
    /// use sortvis_playback::{Condition, ErrorKind, RunRequest};
    ///
    /// let request = RunRequest::from_name("quickSort", 50, Condition::Random).unwrap();
    /// assert_eq!(request.algorithm.name(), "quick");
    ///
    /// let err = RunRequest::from_name("bogoSort", 50, Condition::Random).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    /// ```
    pub fn from_name(algorithm: &str, size: usize, condition: Condition) -> Result<Self> {
        let request = Self::new(algorithm.parse()?, size, condition);
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        check_size(self.size)
    }
}

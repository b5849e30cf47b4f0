use std::fmt::{self, Display};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use sortvis_orst::{Algorithm, Result, Snapshot};

use crate::generate::generate;
use crate::pace::Pacer;
use crate::{PlaybackConfig, Renderer, RunRequest};

/// Identifies one run. Later runs always have larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u64);

impl RunId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing has been started, or playback was reset.
    #[default]
    Idle,
    /// The input array of a new run is being generated.
    Generating,
    /// The algorithm of this run is emitting snapshots.
    Running(RunId),
    /// This run's sorted result is on display.
    Complete(RunId),
}

/// A started run: the generated input and the algorithm that has to sort it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub id: RunId,
    pub algorithm: Algorithm,
    pub input: Vec<i64>,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackReport {
    pub run: RunId,
    pub algorithm: Algorithm,
    pub size: usize,
    /// Snapshots accepted into the playback state.
    pub snapshots: usize,
    /// Snapshots handed to the renderer. The unsorted and the final frame are not counted.
    pub frames: usize,
    pub elapsed: Duration,
}

/// Owns the playback state: what is on display and which run it belongs to.
///
/// The state only moves through [`start`](Player::start), [`on_snapshot`](Player::on_snapshot)
/// and [`on_complete`](Player::on_complete). Snapshots and results tagged with any run other
/// than the one currently running are dropped, so a superseded run can never leak frames into
/// the display.
#[derive(Debug)]
pub struct Player {
    config: PlaybackConfig,
    rng: StdRng,
    state: PlaybackState,
    display: Option<Snapshot<i64>>,
    current: Option<(RunId, Algorithm, usize)>,
    last_run: u64,
    snapshots: usize,
}

impl Player {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            rng: config.rng(),
            config,
            state: PlaybackState::Idle,
            display: None,
            current: None,
            last_run: 0,
            snapshots: 0,
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The frame currently on display.
    pub fn display(&self) -> Option<&Snapshot<i64>> {
        self.display.as_ref()
    }

    /// Snapshots accepted for the current run.
    pub fn snapshots(&self) -> usize {
        self.snapshots
    }

    /// Generates the input for `request` and makes it the running run.
    ///
    /// The raw input goes on display straight away. An invalid request is rejected before
    /// anything changes.
    pub fn start(&mut self, request: &RunRequest) -> Result<Run> {
        request.validate()?;

        self.state = PlaybackState::Generating;
        let input = generate(request.size, request.condition, &mut self.rng)?;

        self.last_run += 1;
        let id = RunId(self.last_run);

        self.display = Some(Snapshot::from(input.clone()));
        self.current = Some((id, request.algorithm, request.size));
        self.snapshots = 0;
        self.state = PlaybackState::Running(id);

        tracing::debug!(
            run = %id,
            algorithm = %request.algorithm,
            size = request.size,
            condition = %request.condition,
            "run started"
        );

        Ok(Run {
            id,
            algorithm: request.algorithm,
            input,
        })
    }

    /// Puts `snapshot` on display if `run` is the running run. Returns whether it was accepted.
    pub fn on_snapshot(&mut self, run: RunId, snapshot: Snapshot<i64>) -> bool {
        if self.state != PlaybackState::Running(run) {
            tracing::trace!(run = %run, "dropping stale snapshot");
            return false;
        }
        self.display = Some(snapshot);
        self.snapshots += 1;
        true
    }

    /// Puts the sorted `result` on display and completes `run`, if it is the running run.
    pub fn on_complete(&mut self, run: RunId, result: Vec<i64>) -> bool {
        if self.state != PlaybackState::Running(run) {
            tracing::trace!(run = %run, "dropping stale result");
            return false;
        }
        self.display = Some(Snapshot::from(result));
        self.state = PlaybackState::Complete(run);
        true
    }

    /// Abandons `run` after its algorithm failed. The last frame stays on display.
    pub fn on_failed(&mut self, run: RunId) -> bool {
        if self.state != PlaybackState::Running(run) {
            return false;
        }
        self.state = PlaybackState::Idle;
        true
    }

    /// Clears the display and forgets the current run. Run ids keep counting up.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Idle;
        self.display = None;
        self.current = None;
        self.snapshots = 0;
    }

    pub(crate) fn report(&self, frames: usize, elapsed: Duration) -> Option<PlaybackReport> {
        let (run, algorithm, size) = self.current?;
        Some(PlaybackReport {
            run,
            algorithm,
            size,
            snapshots: self.snapshots,
            frames,
            elapsed,
        })
    }

    /// Plays one run from start to finish on the calling thread.
    ///
    /// The unsorted input is painted first. The algorithm is then invoked exactly once and its
    /// snapshots are painted from inside the observer according to the configured
    /// [`Cadence`](crate::Cadence). The sorted result is painted last with
    /// [`Renderer::finish`].
    pub fn play<V>(&mut self, request: &RunRequest, renderer: &mut V) -> Result<PlaybackReport>
    where
        V: Renderer + ?Sized,
    {
        let run = self.start(request)?;
        let started = Instant::now();
        let mut pacer = Pacer::new(self.config.cadence);

        if let Some(frame) = &self.display {
            renderer.render(run.id, frame);
        }
        hold(self.config.lead_in);

        let sorter = run.algorithm.sorter::<i64>();
        let outcome = {
            let mut observer = |snapshot: Snapshot<i64>| {
                if !self.on_snapshot(run.id, snapshot.clone()) {
                    return;
                }
                let now = Instant::now();
                if pacer.should_paint(now) {
                    renderer.render(run.id, &snapshot);
                    hold(pacer.painted(now));
                }
            };
            sorter.sorted(&run.input, Some(&mut observer))
        };

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                self.on_failed(run.id);
                return Err(err);
            }
        };

        self.on_complete(run.id, result);
        if let Some(frame) = &self.display {
            renderer.finish(run.id, frame);
        }

        let report = PlaybackReport {
            run: run.id,
            algorithm: run.algorithm,
            size: run.input.len(),
            snapshots: self.snapshots,
            frames: pacer.frames(),
            elapsed: started.elapsed(),
        };
        tracing::info!(
            run = %report.run,
            algorithm = %report.algorithm,
            snapshots = report.snapshots,
            frames = report.frames,
            elapsed = ?report.elapsed,
            "run complete"
        );
        Ok(report)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

fn hold(pause: Duration) {
    if !pause.is_zero() {
        thread::sleep(pause);
    }
}

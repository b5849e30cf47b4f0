use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use sortvis_orst::{Error, Observer, Result, Snapshot};
use tokio::sync::mpsc;

use crate::pace::Pacer;
use crate::{
    PlaybackConfig, PlaybackReport, PlaybackState, Player, Renderer, Run, RunId, RunRequest,
};

#[derive(Debug)]
enum Event {
    Snapshot(RunId, Snapshot<i64>),
    Complete(RunId, Vec<i64>),
    Failed(RunId, Error),
}

/// What one [`Driver::step`] did to the playback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `snapshot` of `run` is now on display.
    Frame { run: RunId, snapshot: Snapshot<i64> },
    /// `run` completed and its sorted array, `frame`, is on display.
    Finished { run: RunId, frame: Snapshot<i64> },
}

/// Forwards snapshots from the worker thread to the driver.
///
/// The channel holds one event, so the sorter blocks at every snapshot until the driver has
/// taken the previous one. Once a newer run has started, or the driver has gone away, the
/// observer detaches and the sorter finishes without copying the array any more.
struct ChannelObserver {
    run: RunId,
    active: Arc<AtomicU64>,
    sender: mpsc::Sender<Event>,
    closed: bool,
}

impl ChannelObserver {
    fn is_current(&self) -> bool {
        self.active.load(Ordering::Acquire) == self.run.get()
    }
}

impl Observer<i64> for ChannelObserver {
    fn observe(&mut self, snapshot: Snapshot<i64>) {
        if self.is_detached() {
            return;
        }
        if self
            .sender
            .blocking_send(Event::Snapshot(self.run, snapshot))
            .is_err()
        {
            self.closed = true;
        }
    }

    fn is_detached(&self) -> bool {
        self.closed || !self.is_current()
    }
}

fn work(run: Run, active: Arc<AtomicU64>, sender: mpsc::Sender<Event>) {
    let mut observer = ChannelObserver {
        run: run.id,
        active,
        sender,
        closed: false,
    };

    let sorter = run.algorithm.sorter::<i64>();
    let event = match sorter.sorted(&run.input, Some(&mut observer)) {
        Ok(result) => Event::Complete(run.id, result),
        Err(err) => Event::Failed(run.id, err),
    };

    if !observer.is_current() {
        tracing::debug!(run = %run.id, "superseded run finished");
        return;
    }
    // the receiver is gone if the driver was dropped or reset meanwhile
    let _ = observer.sender.blocking_send(event);
}

/// Plays runs on tokio's blocking pool.
///
/// [`start`](Driver::start) spawns the algorithm of a new run and returns at once. The
/// snapshots are then pulled one at a time with [`step`](Driver::step), or all the way to the
/// end with [`drive`](Driver::drive). Starting another run before the current one finished
/// supersedes it: nothing of the old run reaches the playback state afterwards.
///
/// ```
/// use sortvis_playback::{Algorithm, Condition, Driver, PlaybackConfig, RunRequest, Step};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> sortvis_playback::Result<()> {
/// let mut driver = Driver::new(PlaybackConfig::seeded(1));
/// driver.start(&RunRequest::new(Algorithm::Insertion, 3, Condition::Reverse))?;
///
/// let mut frames = 0;
/// while let Some(step) = driver.step().await? {
///     match step {
///         Step::Frame { .. } => frames += 1,
///         Step::Finished { frame, .. } => assert_eq!(frame.as_slice(), &[1, 2, 3]),
///     }
/// }
///
/// assert_eq!(frames, 3);
/// assert_eq!(driver.player().display().unwrap().as_slice(), &[1, 2, 3]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Driver {
    player: Player,
    active: Arc<AtomicU64>,
    events: Option<mpsc::Receiver<Event>>,
    pacer: Pacer,
    started: Instant,
}

impl Driver {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            pacer: Pacer::new(config.cadence),
            player: Player::new(config),
            active: Arc::new(AtomicU64::new(0)),
            events: None,
            started: Instant::now(),
        }
    }

    /// The playback state the driver feeds.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Starts a new run, superseding the current one if there is any.
    ///
    /// Has to be called from within a tokio runtime.
    pub fn start(&mut self, request: &RunRequest) -> Result<RunId> {
        let run = self.player.start(request)?;
        let id = run.id;

        if let Some(previous) = self.events.take() {
            tracing::debug!(run = %id, "superseding the previous run");
            drop(previous);
        }
        self.active.store(id.get(), Ordering::Release);

        let (sender, receiver) = mpsc::channel(1);
        self.events = Some(receiver);
        self.pacer = Pacer::new(self.player.config().cadence);
        self.started = Instant::now();

        let active = Arc::clone(&self.active);
        tokio::task::spawn_blocking(move || work(run, active, sender));

        Ok(id)
    }

    /// Applies the next event of the running run to the playback state.
    ///
    /// Returns `Ok(None)` when no run is running. A failing algorithm leaves the player idle and
    /// its error is returned.
    pub async fn step(&mut self) -> Result<Option<Step>> {
        let PlaybackState::Running(current) = self.player.state() else {
            return Ok(None);
        };
        let Some(events) = self.events.as_mut() else {
            return Ok(None);
        };

        match events.recv().await {
            Some(Event::Snapshot(run, snapshot)) => {
                self.player.on_snapshot(run, snapshot.clone());
                Ok(Some(Step::Frame { run, snapshot }))
            }
            Some(Event::Complete(run, result)) => {
                self.events = None;
                self.player.on_complete(run, result);
                match self.player.display() {
                    Some(frame) => Ok(Some(Step::Finished {
                        run,
                        frame: frame.clone(),
                    })),
                    None => Ok(None),
                }
            }
            Some(Event::Failed(run, err)) => {
                self.events = None;
                self.player.on_failed(run);
                tracing::warn!(run = %run, error = %err, "sort failed");
                Err(err)
            }
            None => {
                self.events = None;
                self.player.on_failed(current);
                tracing::error!(run = %current, "sorting worker stopped without a result");
                Ok(None)
            }
        }
    }

    /// Steps the running run to the end, painting through `renderer` at the configured pace.
    ///
    /// If nothing of the run has been shown yet, the unsorted array is painted first and held
    /// for the lead in. Returns `Ok(None)` if there was no run to drive or it ended without a
    /// result.
    pub async fn drive<V>(&mut self, renderer: &mut V) -> Result<Option<PlaybackReport>>
    where
        V: Renderer + ?Sized,
    {
        let PlaybackState::Running(run) = self.player.state() else {
            return Ok(None);
        };

        if self.player.snapshots() == 0 {
            if let Some(frame) = self.player.display() {
                renderer.render(run, frame);
            }
            let lead_in = self.player.config().lead_in;
            if !lead_in.is_zero() {
                tokio::time::sleep(lead_in).await;
            }
        }

        while let Some(step) = self.step().await? {
            match step {
                Step::Frame { run, snapshot } => {
                    let now = Instant::now();
                    if self.pacer.should_paint(now) {
                        renderer.render(run, &snapshot);
                        let pause = self.pacer.painted(now);
                        if !pause.is_zero() {
                            tokio::time::sleep(pause).await;
                        }
                    }
                }
                Step::Finished { run, frame } => {
                    renderer.finish(run, &frame);
                    let report = self
                        .player
                        .report(self.pacer.frames(), self.started.elapsed());
                    if let Some(report) = &report {
                        tracing::info!(
                            run = %report.run,
                            algorithm = %report.algorithm,
                            snapshots = report.snapshots,
                            frames = report.frames,
                            elapsed = ?report.elapsed,
                            "run complete"
                        );
                    }
                    return Ok(report);
                }
            }
        }

        Ok(None)
    }

    /// Abandons the running run and clears the display.
    pub fn reset(&mut self) {
        self.active.store(0, Ordering::Release);
        self.events = None;
        self.player.reset();
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.active.store(0, Ordering::Release);
    }
}

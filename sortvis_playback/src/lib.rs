//! Turns a sort into an animation.
//!
//! A run starts from a [`RunRequest`]: an array size, an ordering [`Condition`] and an
//! [`Algorithm`]. The array is generated, painted once as it is, then the algorithm is invoked
//! exactly once and every snapshot it emits flows through the playback state to a [`Renderer`]
//! at the pace set by [`Cadence`]. The final sorted array is always painted last, even when the
//! algorithm had nothing to report.
//!
//! Two ways of playing are offered:
//!
//! - [`Player::play`] runs the algorithm on the calling thread and paints from inside the
//!   observer callback.
//! - [`Driver`] runs the algorithm on tokio's blocking pool and hands snapshots over a channel
//!   that holds a single event, so the algorithm waits at every snapshot until the driver has
//!   taken the previous one. Starting a new run while one is still going detaches the old one.
//!
//! # Example
//!
//! ```
//! use sortvis_orst::{Algorithm, Snapshot};
//! use sortvis_playback::{Condition, PlaybackConfig, Player, Renderer, RunId, RunRequest};
//!
//! #[derive(Default)]
//! struct Count(usize);
//!
//! impl Renderer for Count {
//!     fn render(&mut self, _: RunId, _: &Snapshot<i64>) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut player = Player::new(PlaybackConfig::seeded(7));
//! let mut renderer = Count::default();
//! let request = RunRequest::new(Algorithm::Bubble, 10, Condition::Reverse);
//!
//! let report = player.play(&request, &mut renderer).unwrap();
//!
//! // the unsorted array, one frame per swap, then the sorted array
//! assert_eq!(report.snapshots, 45);
//! assert_eq!(renderer.0, 1 + 45 + 1);
//! assert_eq!(player.display().unwrap().as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//! ```

mod config;
mod driver;
mod generate;
mod pace;
mod player;
mod render;

pub use config::{Cadence, PlaybackConfig, RunRequest};
pub use driver::{Driver, Step};
pub use generate::{check_size, generate, Condition, ParseConditionError, MAX_SIZE, MIN_SIZE};
pub use player::{PlaybackReport, PlaybackState, Player, Run, RunId};
pub use render::Renderer;

pub use sortvis_orst::{Algorithm, Error, ErrorKind, Result, Snapshot};

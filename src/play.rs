use std::time::Duration;

use anyhow::Context;
use clap::Args;
use colored::Colorize;
use sortvis_playback::{
    Algorithm, Cadence, Condition, Driver, PlaybackConfig, RunRequest, MAX_SIZE, MIN_SIZE,
};

use crate::terminal::TerminalRenderer;

/// Plays one sort in the terminal.
#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Algorithm to play, e.g. `bubble`, `mergeSort` or `cocktail-shaker`. See `sortvis list`.
    #[arg(short, long)]
    pub algorithm: Algorithm,

    /// How the array is arranged before sorting.
    #[arg(short, long, value_enum, default_value_t = Condition::Random)]
    pub condition: Condition,

    /// Number of elements.
    #[arg(short, long, default_value_t = 100)]
    pub size: usize,

    /// Milliseconds to hold each frame.
    #[arg(long, default_value_t = 5)]
    pub delay_ms: u64,

    /// Paint at most one frame per this many milliseconds instead of every frame.
    #[arg(long, conflicts_with = "delay_ms")]
    pub throttle_ms: Option<u64>,

    /// Milliseconds the unsorted array is shown before sorting starts.
    #[arg(long, default_value_t = 500)]
    pub lead_in_ms: u64,

    /// Seed for the random arrangement, for repeatable runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Columns used to draw the array.
    #[arg(short, long, default_value_t = 80)]
    pub width: usize,
}

impl PlayArgs {
    fn config(&self) -> PlaybackConfig {
        let cadence = match self.throttle_ms {
            Some(ms) => Cadence::Throttled {
                min_interval: Duration::from_millis(ms),
            },
            None => Cadence::EverySnapshot {
                delay: Duration::from_millis(self.delay_ms),
            },
        };

        PlaybackConfig {
            cadence,
            lead_in: Duration::from_millis(self.lead_in_ms),
            seed: self.seed,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let request = RunRequest::new(self.algorithm, self.size, self.condition);
        request.validate().with_context(|| {
            format!("the array size has to be between {MIN_SIZE} and {MAX_SIZE}")
        })?;

        let mut driver = Driver::new(self.config());
        let mut renderer = TerminalRenderer::new(self.algorithm, self.size, self.width);

        driver.start(&request)?;
        let report = driver
            .drive(&mut renderer)
            .await?
            .context("the sort stopped before producing a result")?;

        println!(
            "{} sorted {} elements ({}): {} steps, {} painted in {:.2?}",
            report.algorithm.name().bold().green(),
            report.size,
            self.condition,
            report.snapshots,
            report.frames,
            report.elapsed
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(throttle_ms: Option<u64>) -> PlayArgs {
        PlayArgs {
            algorithm: Algorithm::Quick,
            condition: Condition::Reverse,
            size: 10,
            delay_ms: 7,
            throttle_ms,
            lead_in_ms: 0,
            seed: Some(4),
            width: 10,
        }
    }

    #[test]
    fn delay_or_throttle() {
        assert_eq!(
            args(None).config().cadence,
            Cadence::EverySnapshot {
                delay: Duration::from_millis(7)
            }
        );
        assert_eq!(
            args(Some(40)).config().cadence,
            Cadence::Throttled {
                min_interval: Duration::from_millis(40)
            }
        );
        assert_eq!(args(None).config().seed, Some(4));
    }

    #[tokio::test]
    async fn out_of_range_sizes_fail() {
        let mut play = args(None);
        play.size = 5001;
        assert!(play.run().await.is_err());
    }
}

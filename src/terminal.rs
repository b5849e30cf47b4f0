use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sortvis_playback::{Algorithm, Renderer, RunId, Snapshot};

/// Draws every frame as one line of blue cells, darker for larger values, under a progress bar
/// that counts the elements already sitting in their final place.
pub struct TerminalRenderer {
    bar: ProgressBar,
    width: usize,
}

impl TerminalRenderer {
    pub fn new(algorithm: Algorithm, size: usize, width: usize) -> Self {
        let bar = ProgressBar::new(size as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{prefix:.bold} [{elapsed_precise}] {bar:50.cyan/blue} {pos}/{len} in place\n{msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_prefix(format!("{} sort", algorithm.name()));

        Self {
            bar,
            width: width.max(1),
        }
    }

    fn draw(&self, frame: &[i64]) -> String {
        let max = frame.iter().copied().max().unwrap_or(0);
        columns(frame, self.width)
            .map(|value| {
                let (r, g, b) = shade(value, max);
                "█".truecolor(r, g, b).to_string()
            })
            .collect()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, run: RunId, frame: &Snapshot<i64>) {
        tracing::trace!(run = %run, "painting frame");
        self.bar.set_position(in_place(frame) as u64);
        self.bar.set_message(self.draw(frame));
    }

    fn finish(&mut self, _: RunId, frame: &Snapshot<i64>) {
        self.bar.set_position(in_place(frame) as u64);
        self.bar.finish_with_message(self.draw(frame));
    }
}

/// Elements already where they end up. Played arrays hold `1..=n`, so `v` belongs at `v - 1`.
fn in_place(frame: &[i64]) -> usize {
    frame
        .iter()
        .enumerate()
        .filter(|&(index, &value)| value == index as i64 + 1)
        .count()
}

/// Picks at most `width` evenly spread values of `frame` to draw.
fn columns(frame: &[i64], width: usize) -> impl Iterator<Item = i64> + '_ {
    let cells = frame.len().min(width);
    (0..cells).map(move |cell| frame[cell * frame.len() / cells])
}

/// RGB of the blue (hue 240) whose lightness falls from 100% towards 30% as `value` approaches
/// `max`.
fn shade(value: i64, max: i64) -> (u8, u8, u8) {
    let ratio = if max > 0 {
        (value as f64 / max as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let lightness = 1.0 - ratio * 0.7;

    // HSL to RGB at full saturation. For hue 240 only blue carries the chroma.
    let chroma = 1.0 - (2.0 * lightness - 1.0).abs();
    let base = lightness - chroma / 2.0;
    let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    (channel(base), channel(base), channel(base + chroma))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressDrawTarget;
    use sortvis_playback::{Condition, Player, RunRequest};

    #[test]
    fn shade_runs_from_white_to_dark_blue() {
        assert_eq!(shade(0, 10), (255, 255, 255));
        assert_eq!(shade(10, 10), (0, 0, 153));

        let (r, g, b) = shade(5, 10);
        assert_eq!(r, g);
        assert!(r > 0 && r < 255);
        assert_eq!(b, 255);
    }

    #[test]
    fn larger_values_are_darker() {
        let lightness = |(r, g, b): (u8, u8, u8)| r as u32 + g as u32 + b as u32;
        for value in 1..100 {
            assert!(lightness(shade(value, 100)) >= lightness(shade(value + 1, 100)));
        }
    }

    #[test]
    fn columns_compress_wide_frames() {
        let frame = (1..=10).collect::<Vec<i64>>();
        assert_eq!(columns(&frame, 5).collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
        assert_eq!(columns(&frame, 80).count(), 10);
        assert_eq!(columns(&[], 80).count(), 0);
    }

    #[test]
    fn counts_elements_in_place() {
        assert_eq!(in_place(&[1, 3, 2, 4]), 2);
        assert_eq!(in_place(&[3, 2, 1]), 1);
        assert_eq!(in_place(&[1, 2, 3]), 3);
    }

    #[test]
    fn renders_without_a_terminal() {
        let mut player = Player::default();
        let run = player
            .start(&RunRequest::new(Algorithm::Bubble, 3, Condition::Reverse))
            .unwrap();

        let mut renderer = TerminalRenderer::new(run.algorithm, 3, 10);
        renderer.bar.set_draw_target(ProgressDrawTarget::hidden());

        renderer.render(run.id, &Snapshot::from(vec![2, 1, 3]));
        assert_eq!(renderer.bar.position(), 1);

        renderer.finish(run.id, &Snapshot::from(vec![1, 2, 3]));
        assert_eq!(renderer.bar.position(), 3);
        assert!(renderer.bar.is_finished());
    }
}

use std::time::Duration;

use sortvis_orst::Snapshot;
use sortvis_playback::{
    Algorithm, Cadence, Condition, ErrorKind, PlaybackConfig, PlaybackState, Player, Renderer,
    RunId, RunRequest,
};
use utilities::fixtures::same_elements;
use utilities::recording::RecordingRenderer;

/// Counts frames without keeping them, for arrays too large to record.
#[derive(Default)]
struct Tally {
    rendered: usize,
    finished: Option<Vec<i64>>,
}

impl Renderer for Tally {
    fn render(&mut self, _: RunId, _: &Snapshot<i64>) {
        self.rendered += 1;
    }

    fn finish(&mut self, _: RunId, frame: &Snapshot<i64>) {
        self.finished = Some(frame.to_vec());
    }
}

#[test]
fn sizes_at_the_limits_play() {
    let mut player = Player::new(PlaybackConfig::seeded(11));

    let mut small = Tally::default();
    let report = player
        .play(&RunRequest::new(Algorithm::Insertion, 3, Condition::Random), &mut small)
        .unwrap();
    assert_eq!(report.size, 3);
    assert_eq!(small.finished, Some(vec![1, 2, 3]));

    let mut large = Tally::default();
    let report = player
        .play(&RunRequest::new(Algorithm::Quick, 5000, Condition::Random), &mut large)
        .unwrap();
    assert_eq!(report.size, 5000);
    assert_eq!(large.finished, Some((1..=5000).collect::<Vec<_>>()));
    assert_eq!(player.state(), PlaybackState::Complete(report.run));
}

#[test]
fn sizes_outside_the_limits_are_rejected() {
    let mut player = Player::default();

    for size in [2, 5001] {
        let mut renderer = RecordingRenderer::default();
        let err = player
            .play(&RunRequest::new(Algorithm::Merge, size, Condition::Reverse), &mut renderer)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(renderer.frames.is_empty());
        assert!(renderer.finished.is_none());
    }
    assert_eq!(player.state(), PlaybackState::Idle);
}

#[test]
fn unsorted_array_is_painted_first_and_sorted_last() {
    let mut player = Player::default();
    let mut renderer = RecordingRenderer::default();

    let report = player
        .play(&RunRequest::new(Algorithm::Heap, 6, Condition::Reverse), &mut renderer)
        .unwrap();

    let (run, first) = &renderer.frames[0];
    assert_eq!(*run, report.run);
    assert_eq!(first, &vec![6, 5, 4, 3, 2, 1]);

    for (run, frame) in &renderer.frames {
        assert_eq!(*run, report.run);
        assert!(same_elements(first, frame));
    }

    assert_eq!(renderer.finished, Some((report.run, vec![1, 2, 3, 4, 5, 6])));
    assert_eq!(renderer.frames.len(), 1 + report.snapshots);
    assert_eq!(report.frames, report.snapshots);
}

#[test]
fn throttled_cadence_still_tracks_every_snapshot() {
    let config = PlaybackConfig::seeded(5).with_cadence(Cadence::Throttled {
        min_interval: Duration::from_secs(3600),
    });
    let mut player = Player::new(config);
    let mut renderer = RecordingRenderer::default();

    let report = player
        .play(&RunRequest::new(Algorithm::Bubble, 8, Condition::Reverse), &mut renderer)
        .unwrap();

    // the unsorted array and the first snapshot, then nothing until the end
    assert_eq!(renderer.frames.len(), 2);
    assert_eq!(report.frames, 1);
    assert_eq!(report.snapshots, 28);
    assert_eq!(
        renderer.finished.map(|(_, frame)| frame),
        Some((1..=8).collect::<Vec<_>>())
    );
}

#[test]
fn delay_is_held_after_every_painted_snapshot() {
    let delay = Duration::from_millis(2);
    let config = PlaybackConfig::default().with_cadence(Cadence::EverySnapshot { delay });
    let mut player = Player::new(config);

    let report = player
        .play(
            &RunRequest::new(Algorithm::Insertion, 3, Condition::Reverse),
            &mut RecordingRenderer::default(),
        )
        .unwrap();

    assert_eq!(report.frames, 3);
    assert!(report.elapsed >= delay * 3);
}

#[test]
fn each_play_is_a_new_run() {
    let mut player = Player::new(PlaybackConfig::seeded(3));
    let request = RunRequest::from_name("countingSort", 20, Condition::Random).unwrap();

    let first = player.play(&request, &mut RecordingRenderer::default()).unwrap();
    let second = player.play(&request, &mut RecordingRenderer::default()).unwrap();

    assert!(second.run > first.run);
    assert_eq!(player.state(), PlaybackState::Complete(second.run));
}

#[test]
fn seeded_players_generate_the_same_arrays() {
    let request = RunRequest::new(Algorithm::Selection, 30, Condition::Random);

    let mut a = Player::new(PlaybackConfig::seeded(99));
    let mut b = Player::new(PlaybackConfig::seeded(99));

    assert_eq!(a.start(&request).unwrap().input, b.start(&request).unwrap().input);
}

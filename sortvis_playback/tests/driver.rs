use std::time::Duration;

use sortvis_playback::{
    Algorithm, Cadence, Condition, Driver, PlaybackConfig, PlaybackState, Player, RunRequest,
    Step,
};
use utilities::fixtures::is_sorted;
use utilities::recording::{Recorder, RecordingRenderer};

#[tokio::test]
async fn drive_paints_a_whole_run() {
    let mut driver = Driver::new(PlaybackConfig::seeded(8));
    let run = driver
        .start(&RunRequest::new(Algorithm::Shell, 40, Condition::Random))
        .unwrap();

    let mut renderer = RecordingRenderer::default();
    let report = driver.drive(&mut renderer).await.unwrap().unwrap();

    assert_eq!(report.run, run);
    assert_eq!(renderer.frames.len(), 1 + report.snapshots);
    assert_eq!(renderer.finished, Some((run, (1..=40).collect())));
    assert_eq!(driver.player().state(), PlaybackState::Complete(run));
}

#[tokio::test]
async fn a_new_run_supersedes_the_old_one() {
    let mut driver = Driver::new(PlaybackConfig::seeded(21));
    let old = driver
        .start(&RunRequest::new(Algorithm::Bubble, 2000, Condition::Reverse))
        .unwrap();

    for _ in 0..3 {
        match driver.step().await.unwrap() {
            Some(Step::Frame { run, .. }) => assert_eq!(run, old),
            other => panic!("expected a frame of the first run, got {other:?}"),
        }
    }

    let new = driver
        .start(&RunRequest::new(Algorithm::Merge, 50, Condition::Random))
        .unwrap();
    assert_ne!(old, new);

    let mut renderer = RecordingRenderer::default();
    let report = driver.drive(&mut renderer).await.unwrap().unwrap();

    assert_eq!(report.run, new);
    assert!(renderer.frames.iter().all(|(run, frame)| *run == new && frame.len() == 50));
    assert_eq!(renderer.finished, Some((new, (1..=50).collect())));

    let display = driver.player().display().unwrap();
    assert_eq!(display.len(), 50);
    assert!(is_sorted(display));
    assert_eq!(driver.player().state(), PlaybackState::Complete(new));
}

#[tokio::test]
async fn stepping_ends_with_the_sorted_array() {
    let mut driver = Driver::new(PlaybackConfig::default());
    let run = driver
        .start(&RunRequest::new(Algorithm::Radix, 12, Condition::Reverse))
        .unwrap();

    let mut last = None;
    while let Some(step) = driver.step().await.unwrap() {
        last = Some(step);
    }

    match last {
        Some(Step::Finished { run: finished, frame }) => {
            assert_eq!(finished, run);
            assert_eq!(frame.to_vec(), (1..=12).collect::<Vec<_>>());
        }
        other => panic!("expected the run to finish, got {other:?}"),
    }
    assert!(driver.step().await.unwrap().is_none());
}

#[tokio::test]
async fn reset_abandons_the_running_run() {
    let mut driver = Driver::new(PlaybackConfig::default());
    driver
        .start(&RunRequest::new(Algorithm::Selection, 500, Condition::Reverse))
        .unwrap();
    assert!(driver.step().await.unwrap().is_some());

    driver.reset();

    assert_eq!(driver.player().state(), PlaybackState::Idle);
    assert!(driver.player().display().is_none());
    assert!(driver.step().await.unwrap().is_none());
    assert!(driver
        .drive(&mut RecordingRenderer::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn throttled_drive_skips_frames() {
    let config = PlaybackConfig::seeded(2).with_cadence(Cadence::Throttled {
        min_interval: Duration::from_secs(3600),
    });
    let mut driver = Driver::new(config);
    let run = driver
        .start(&RunRequest::new(Algorithm::Exchange, 30, Condition::Reverse))
        .unwrap();

    let mut renderer = RecordingRenderer::default();
    let report = driver.drive(&mut renderer).await.unwrap().unwrap();

    assert_eq!(renderer.frames.len(), 2);
    assert_eq!(report.frames, 1);
    assert!(report.snapshots > 1);
    assert_eq!(renderer.finished, Some((run, (1..=30).collect())));
}

#[tokio::test]
async fn invalid_requests_leave_the_driver_alone() {
    let mut driver = Driver::new(PlaybackConfig::default());
    assert!(driver
        .start(&RunRequest::new(Algorithm::Quick, 1, Condition::Random))
        .is_err());
    assert_eq!(driver.player().state(), PlaybackState::Idle);
    assert!(driver.step().await.unwrap().is_none());
}

#[tokio::test]
async fn frames_arrive_in_emission_order() {
    for (seed, algorithm) in Algorithm::ALL.into_iter().enumerate() {
        let seed = seed as u64;
        let request = RunRequest::new(algorithm, 60, Condition::Random);

        // a player with the same seed generates the same input as the driver will
        let input = Player::new(PlaybackConfig::seeded(seed))
            .start(&request)
            .unwrap()
            .input;
        let mut recorder = Recorder::default();
        let sorted = algorithm.run(&input, Some(&mut recorder)).unwrap();

        let mut driver = Driver::new(PlaybackConfig::seeded(seed));
        let run = driver.start(&request).unwrap();

        let mut frames = Vec::new();
        let mut finished = None;
        while let Some(step) = driver.step().await.unwrap() {
            match step {
                Step::Frame { run: id, snapshot } => {
                    assert_eq!(id, run);
                    frames.push(snapshot);
                }
                Step::Finished { frame, .. } => finished = Some(frame.to_vec()),
            }
        }

        assert_eq!(frames, recorder.frames, "{algorithm}");
        assert_eq!(finished, Some(sorted), "{algorithm}");
    }
}

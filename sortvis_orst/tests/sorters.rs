use sortvis_orst::{Algorithm, ErrorKind, Observer, Snapshot};
use utilities::fixtures::{assert_sorted_permutation, same_elements, shuffled, Inputs};
use utilities::recording::Recorder;

fn record(algorithm: Algorithm, input: &[i64]) -> (Vec<i64>, Vec<Snapshot<i64>>) {
    let mut recorder = Recorder::default();
    let sorted = algorithm
        .run(input, Some(&mut recorder))
        .expect("input should be accepted");
    (sorted, recorder.frames)
}

#[test]
fn every_algorithm_sorts_every_input() {
    let inputs = Inputs::new(42);

    for algorithm in Algorithm::ALL {
        let cases: Vec<&Vec<i64>> = if algorithm.is_distribution() {
            inputs.non_negative().collect()
        } else {
            inputs.all().collect()
        };

        for input in cases {
            let (sorted, frames) = record(algorithm, input);
            assert_sorted_permutation(input, &sorted);

            for frame in &frames {
                assert!(
                    same_elements(input, frame),
                    "{algorithm}: frame {frame:?} lost or invented elements"
                );
            }

            // the last frame, or the result when nothing was emitted, is the sorted sequence
            let last = frames.last().map(|f| f.to_vec()).unwrap_or(sorted.clone());
            assert_eq!(last, sorted, "{algorithm}");
        }
    }
}

#[test]
fn caller_input_is_left_alone() {
    let input = vec![5, 3, 1, 4, 2];
    for algorithm in Algorithm::ALL {
        let _ = record(algorithm, &input);
        assert_eq!(input, vec![5, 3, 1, 4, 2]);
    }
}

#[test]
fn sorted_input_is_returned_unchanged() {
    let input = (1..=64).collect::<Vec<i64>>();
    for algorithm in Algorithm::ALL {
        let (sorted, _) = record(algorithm, &input);
        assert_eq!(sorted, input, "{algorithm}");
    }
}

#[test]
fn playable_extremes() {
    for algorithm in Algorithm::ALL {
        let small = shuffled(3, 1);
        assert_sorted_permutation(&small, &algorithm.run(&small, None).unwrap());
    }

    // quadratic sorts emit millions of frames at this size, so they run unobserved
    for algorithm in [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::CocktailShaker,
        Algorithm::Exchange,
    ] {
        let large = shuffled(5000, 3);
        assert_sorted_permutation(&large, &algorithm.run(&large, None).unwrap());

        let reversed = (1..=5000).rev().collect::<Vec<i64>>();
        assert_sorted_permutation(&reversed, &algorithm.run(&reversed, None).unwrap());
    }

    for algorithm in [
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Shell,
        Algorithm::Comb,
        Algorithm::Counting,
        Algorithm::Radix,
    ] {
        let large = shuffled(5000, 2);

        // keeping every frame of a 5000 element sort would not fit in memory
        let mut count = 0;
        let mut last = None;
        let mut tail = |snapshot: Snapshot<i64>| {
            count += 1;
            last = Some(snapshot);
        };
        let sorted = algorithm.run(&large, Some(&mut tail)).unwrap();

        assert_sorted_permutation(&large, &sorted);
        assert!(count > 0, "{algorithm}");
        assert_eq!(last.map(|f| f.to_vec()), Some(sorted));
    }
}

#[test]
fn same_result_through_different_paths() {
    let input = [5, 3, 1, 4, 2];

    let (bubble, bubble_frames) = record(Algorithm::Bubble, &input);
    let (merge, merge_frames) = record(Algorithm::Merge, &input);

    assert_eq!(bubble, vec![1, 2, 3, 4, 5]);
    assert_eq!(merge, bubble);
    assert_eq!(bubble_frames.last().unwrap().as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(merge_frames.last().unwrap().as_slice(), &[1, 2, 3, 4, 5]);
    assert_ne!(bubble_frames, merge_frames);
}

#[test]
fn distribution_sorts_reject_negatives() {
    for algorithm in [Algorithm::Counting, Algorithm::Radix] {
        let mut recorder = Recorder::default();
        let err = algorithm
            .run(&[3i64, -1, 2], Some(&mut recorder))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(recorder.frames.is_empty(), "{algorithm} started before failing");
    }
}

/// Stops wanting snapshots after the first few.
struct Impatient {
    budget: usize,
    seen: usize,
}

impl Observer<i64> for Impatient {
    fn observe(&mut self, _: Snapshot<i64>) {
        self.seen += 1;
    }

    fn is_detached(&self) -> bool {
        self.seen >= self.budget
    }
}

#[test]
fn detached_observer_still_gets_a_sorted_result() {
    let input = (1..=200).rev().collect::<Vec<i64>>();

    for algorithm in Algorithm::ALL {
        let mut observer = Impatient { budget: 5, seen: 0 };
        let sorted = algorithm.run(&input, Some(&mut observer)).unwrap();

        assert_eq!(observer.seen, 5, "{algorithm}");
        assert_sorted_permutation(&input, &sorted);
    }
}

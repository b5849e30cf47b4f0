use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The inputs every sorter is run against: shuffled, reversed, already sorted, full of
/// duplicates and sprinkled with negatives, at a few lengths small enough to keep every frame.
pub struct Inputs {
    pub shuffled: Vec<Vec<i64>>,
    pub reversed: Vec<Vec<i64>>,
    pub sorted: Vec<Vec<i64>>,
    pub duplicates: Vec<Vec<i64>>,
    pub negatives: Vec<Vec<i64>>,
}

impl Inputs {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let lengths = [0, 1, 2, 3, 17, 128];

        let shuffled = lengths
            .iter()
            .map(|&n| {
                let mut values = (1..=n as i64).collect::<Vec<_>>();
                values.shuffle(&mut rng);
                values
            })
            .collect();

        let reversed = lengths
            .iter()
            .map(|&n| (1..=n as i64).rev().collect())
            .collect();

        let sorted = lengths.iter().map(|&n| (1..=n as i64).collect()).collect();

        let duplicates = lengths
            .iter()
            .map(|&n| (0..n).map(|_| rng.gen_range(0..8)).collect())
            .collect();

        let negatives = lengths
            .iter()
            .map(|&n| (0..n).map(|_| rng.gen_range(-1000..1000)).collect())
            .collect();

        Self {
            shuffled,
            reversed,
            sorted,
            duplicates,
            negatives,
        }
    }

    /// Every input that only holds non-negative values.
    pub fn non_negative(&self) -> impl Iterator<Item = &Vec<i64>> {
        self.shuffled
            .iter()
            .chain(&self.reversed)
            .chain(&self.sorted)
            .chain(&self.duplicates)
    }

    pub fn all(&self) -> impl Iterator<Item = &Vec<i64>> {
        self.non_negative().chain(&self.negatives)
    }
}

/// A shuffled permutation of `1..=n`.
pub fn shuffled(n: usize, seed: u64) -> Vec<i64> {
    let mut values = (1..=n as i64).collect::<Vec<_>>();
    values.shuffle(&mut StdRng::seed_from_u64(seed));
    values
}

pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// `true` when both slices hold the same elements, duplicates included.
pub fn same_elements(a: &[i64], b: &[i64]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[track_caller]
pub fn assert_sorted_permutation(input: &[i64], output: &[i64]) {
    assert!(is_sorted(output), "not sorted: {output:?}");
    assert!(
        same_elements(input, output),
        "{output:?} is not a permutation of {input:?}"
    );
}

use std::fmt::{self, Display};
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use sortvis_orst::{Error, Result};

/// Smallest array worth animating.
pub const MIN_SIZE: usize = 3;
/// Largest array the player accepts.
pub const MAX_SIZE: usize = 5000;

/// How the generated array is arranged before sorting starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Condition {
    /// A uniformly random permutation.
    #[default]
    Random,
    /// Strictly descending.
    Reverse,
}

impl Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Random => f.write_str("Random"),
            Condition::Reverse => f.write_str("Reverse"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ordering condition `{0}`, expected `Random` or `Reverse`")]
pub struct ParseConditionError(String);

impl FromStr for Condition {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            Ok(Condition::Random)
        } else if s.eq_ignore_ascii_case("reverse") {
            Ok(Condition::Reverse)
        } else {
            Err(ParseConditionError(s.to_string()))
        }
    }
}

/// Fails with [`Error::InvalidSize`] unless `MIN_SIZE <= size <= MAX_SIZE`.
pub fn check_size(size: usize) -> Result<()> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(Error::InvalidSize {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        })
    }
}

/// Generates `1..=size` arranged according to `condition`.
///
/// ```
/// use sortvis_playback::{generate, Condition};
///
/// let values = generate(5, Condition::Reverse, &mut rand::thread_rng()).unwrap();
/// assert_eq!(values, vec![5, 4, 3, 2, 1]);
///
/// assert!(generate(2, Condition::Random, &mut rand::thread_rng()).is_err());
/// ```
pub fn generate<R>(size: usize, condition: Condition, rng: &mut R) -> Result<Vec<i64>>
where
    R: Rng + ?Sized,
{
    check_size(size)?;

    let mut values = (1..=size as i64).collect::<Vec<_>>();
    match condition {
        Condition::Random => values.shuffle(rng),
        Condition::Reverse => values.reverse(),
    }
    Ok(values)
}

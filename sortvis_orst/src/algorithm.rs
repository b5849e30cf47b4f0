use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{
    BubbleSorter, CocktailShakerSorter, CombSorter, CountingSorter, Error, ExchangeSorter,
    HeapSorter, InsertionSorter, IntKey, MergeSorter, Observer, QuickSorter, RadixSorter, Result,
    SelectionSorter, ShellSorter, Sorter,
};

/// Every sorter this crate can animate, selectable by name.
///
/// # Example
///
/// ```
/// use sortvis_orst::Algorithm;
///
/// let algorithm: Algorithm = "cocktailShakerSort".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::CocktailShaker);
/// assert_eq!(algorithm.name(), "cocktail-shaker");
///
/// assert!("bogo".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Selection,
    Merge,
    Heap,
    Quick,
    Shell,
    Bubble,
    CocktailShaker,
    Comb,
    Exchange,
    Counting,
    Radix,
}

impl Algorithm {
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Shell,
        Algorithm::Bubble,
        Algorithm::CocktailShaker,
        Algorithm::Comb,
        Algorithm::Exchange,
        Algorithm::Counting,
        Algorithm::Radix,
    ];

    /// Canonical name, as accepted by [`FromStr`] and printed by [`Display`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
            Algorithm::Shell => "shell",
            Algorithm::Bubble => "bubble",
            Algorithm::CocktailShaker => "cocktail-shaker",
            Algorithm::Comb => "comb",
            Algorithm::Exchange => "exchange",
            Algorithm::Counting => "counting",
            Algorithm::Radix => "radix",
        }
    }

    /// Worst case running time, for display.
    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Merge | Algorithm::Heap => "O(n log n)",
            Algorithm::Quick => "O(n log n) avg, O(n^2) worst",
            Algorithm::Shell => "O(n^1.3) typical",
            Algorithm::Counting => "O(n + range)",
            Algorithm::Radix => "O(d * n)",
            Algorithm::Insertion
            | Algorithm::Selection
            | Algorithm::Bubble
            | Algorithm::CocktailShaker
            | Algorithm::Comb
            | Algorithm::Exchange => "O(n^2)",
        }
    }

    /// `true` for the sorts that bucket values instead of comparing them. These only accept
    /// non-negative input.
    pub fn is_distribution(self) -> bool {
        matches!(self, Algorithm::Counting | Algorithm::Radix)
    }

    pub fn sorter<T>(self) -> Box<dyn Sorter<T>>
    where
        T: IntKey + 'static,
    {
        match self {
            Algorithm::Insertion => Box::new(InsertionSorter),
            Algorithm::Selection => Box::new(SelectionSorter),
            Algorithm::Merge => Box::new(MergeSorter),
            Algorithm::Heap => Box::new(HeapSorter),
            Algorithm::Quick => Box::new(QuickSorter),
            Algorithm::Shell => Box::new(ShellSorter),
            Algorithm::Bubble => Box::new(BubbleSorter),
            Algorithm::CocktailShaker => Box::new(CocktailShakerSorter),
            Algorithm::Comb => Box::new(CombSorter),
            Algorithm::Exchange => Box::new(ExchangeSorter),
            Algorithm::Counting => Box::new(CountingSorter),
            Algorithm::Radix => Box::new(RadixSorter),
        }
    }

    /// Sorts a copy of `input` with this algorithm.
    pub fn run<T>(self, input: &[T], observer: Option<&mut dyn Observer<T>>) -> Result<Vec<T>>
    where
        T: IntKey + 'static,
    {
        self.sorter().sorted(input, observer)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts `bubble`, `Bubble`, `bubble-sort`, `bubble_sort` and `bubbleSort` alike.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let stem = match normalized.strip_suffix("sort") {
            Some(stem) if !stem.is_empty() => stem,
            _ => normalized.as_str(),
        };

        let algorithm = match stem {
            "insertion" => Algorithm::Insertion,
            "selection" => Algorithm::Selection,
            "merge" => Algorithm::Merge,
            "heap" => Algorithm::Heap,
            "quick" => Algorithm::Quick,
            "shell" => Algorithm::Shell,
            "bubble" => Algorithm::Bubble,
            "cocktailshaker" | "cocktail" | "shaker" => Algorithm::CocktailShaker,
            "comb" => Algorithm::Comb,
            "exchange" => Algorithm::Exchange,
            "counting" => Algorithm::Counting,
            "radix" | "lsdradix" => Algorithm::Radix,
            _ => return Err(Error::UnsupportedAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}

//! Sorting algorithms that narrate themselves.
//!
//! Every sorter in this crate does the same job as its textbook counterpart, but each time it
//! changes the order of the array it hands a [`Snapshot`] of the whole array to an
//! [`Observer`]. Feeding those snapshots to a renderer one after another animates the sort.
//!
//! # Example
//!
//! ```
//! use sortvis_orst::{BubbleSorter, Snapshot, Sorter};
//!
//! let input: Vec<i64> = vec![5, 3, 1, 4, 2];
//! let mut frames = Vec::new();
//! let mut observer = |snapshot: Snapshot<i64>| frames.push(snapshot);
//!
//! let sorted = BubbleSorter.sorted(&input, Some(&mut observer)).unwrap();
//!
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! assert_eq!(frames.last().unwrap().as_slice(), &[1, 2, 3, 4, 5]);
//! ```
//!
//! Sorters can also be picked by name through [`Algorithm`]:
//!
//! ```
//! use sortvis_orst::Algorithm;
//!
//! let algorithm: Algorithm = "mergeSort".parse().unwrap();
//! assert_eq!(algorithm.run(&[3, -1, 2], None).unwrap(), vec![-1, 2, 3]);
//! ```

mod algorithm;
mod error;
mod key;
mod observer;
mod sorters;

pub use algorithm::Algorithm;
pub use error::{Error, ErrorKind, Result};
pub use key::IntKey;
pub use observer::{Observer, Snapshot, Tracker};

pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::cocktail_shaker_sorter::CocktailShakerSorter;
pub use sorters::comb_sorter::CombSorter;
pub use sorters::counting_sorter::{CountingSorter, MAX_COUNTING_RANGE};
pub use sorters::exchange_sorter::ExchangeSorter;
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::radix_sorter::RadixSorter;
pub use sorters::selection_sorter::SelectionSorter;
pub use sorters::shell_sorter::ShellSorter;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// Only [`sort_tracked`](Sorter::sort_tracked) has to be written by hand. It sorts `slice` in
/// place and routes every order-changing step through the [`Tracker`], which takes care of
/// handing snapshots to whoever is watching.
pub trait Sorter<T>
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()>;

    /// Sorts `slice` in place without reporting anything.
    fn sort(&self, slice: &mut [T]) -> Result<()> {
        self.sort_tracked(slice, &mut Tracker::silent())
    }

    /// Sorts `slice` in place, reporting to `observer`. Returns the number of snapshots handed
    /// out.
    fn sort_with(&self, slice: &mut [T], observer: &mut dyn Observer<T>) -> Result<usize> {
        let mut tracker = Tracker::new(observer);
        self.sort_tracked(slice, &mut tracker)?;
        Ok(tracker.emitted())
    }

    /// Sorts a copy of `input` and returns it. The caller's slice is left untouched.
    fn sorted(&self, input: &[T], observer: Option<&mut dyn Observer<T>>) -> Result<Vec<T>> {
        let mut working = input.to_vec();
        let mut tracker = match observer {
            Some(observer) => Tracker::new(observer),
            None => Tracker::silent(),
        };
        self.sort_tracked(&mut working, &mut tracker)?;
        Ok(working)
    }
}

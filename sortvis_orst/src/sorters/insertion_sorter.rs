use crate::{Result, Sorter, Tracker};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// Here the new element walks left one adjacent swap at a time, so every inversion it fixes shows
/// up as its own snapshot.
///
/// # Usage
///```
/// use sortvis_orst::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        for unsorted in 1..slice.len() {
            let mut i = unsorted;
            while i > 0 && slice[i - 1] > slice[i] {
                tracker.swap(slice, i - 1, i);
                i -= 1;
            }
        }

        Ok(())
    }
}

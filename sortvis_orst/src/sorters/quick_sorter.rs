use crate::{Result, Sorter, Tracker};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use sortvis_orst::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot. The sub-arrays are then sorted the same way.
///
/// This sorter uses the Lomuto scheme with the last element of each range as the pivot, and takes
/// a snapshot on every partition swap. On reversed input the ranges shrink by one element at a
/// time, so pending ranges are kept on an explicit stack instead of the call stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

/// Partitions `slice[low..=high]` around `slice[high]` and returns the pivot's final index.
fn partition<T>(slice: &mut [T], low: usize, high: usize, tracker: &mut Tracker<'_, T>) -> usize
where
    T: Ord + Clone,
{
    let mut store = low;
    for i in low..high {
        if slice[i] < slice[high] {
            tracker.swap(slice, store, i);
            store += 1;
        }
    }
    tracker.swap(slice, store, high);
    store
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        // half-open ranges still waiting to be partitioned
        let mut pending = vec![(0, slice.len())];

        while let Some((start, end)) = pending.pop() {
            if end - start < 2 {
                continue;
            }
            let pivot = partition(slice, start, end - 1, tracker);

            // left range goes on top so it is handled first
            pending.push((pivot + 1, end));
            pending.push((start, pivot));
        }

        Ok(())
    }
}

use crate::{Result, Sorter, Tracker};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use sortvis_orst::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large  lists, and generally
/// performs worse than the similar insertion sort.
///
/// # Algorithm
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front (
/// left) of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. The algorithm proceeds by finding the smallest
/// element in the unsorted sublist, exchanging (swapping
/// ) it with the leftmost unsorted element (putting
/// it in sorted order), and moving the sublist
/// boundaries one element to the right.
///
/// An outer iteration whose minimum is already in place swaps nothing and takes no snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        for unsorted in 0..slice.len() {
            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..slice.len() {
                if slice[i] < slice[smallest_in_rest] {
                    smallest_in_rest = i;
                }
            }
            tracker.swap(slice, unsorted, smallest_in_rest);
        }

        Ok(())
    }
}

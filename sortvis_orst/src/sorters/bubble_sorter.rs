use crate::{Result, Sorter, Tracker};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use sortvis_orst::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// After every pass the largest unsorted element has reached its final place, so each pass stops
/// one element earlier than the last. A snapshot is taken after every swap.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        let mut boundary = slice.len();
        let mut swapped = true;

        while swapped && boundary > 1 {
            swapped = false;
            for i in 1..boundary {
                if slice[i - 1] > slice[i] {
                    tracker.swap(slice, i - 1, i);
                    swapped = true;
                }
            }
            boundary -= 1;
        }

        Ok(())
    }
}

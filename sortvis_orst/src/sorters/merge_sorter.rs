use crate::{Result, Sorter, Tracker};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use sortvis_orst::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Merge sort splits the list in half, sorts both halves and then merges them by repeatedly
/// taking the smaller of the two heads.
///
/// The merge happens inside the slice itself. While merging, the range always looks like
/// `[merged so far | rest of left | rest of right]`: taking the left head leaves everything where
/// it is, taking the right head rotates it in front of the rest of the left half. A snapshot of
/// the whole slice is taken after every element lands in the merged part, so every frame shows
/// each element exactly once.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

fn merge_sort<T>(slice: &mut [T], start: usize, end: usize, tracker: &mut Tracker<'_, T>)
where
    T: Ord + Clone,
{
    if end - start < 2 {
        return;
    }

    let mid = start + (end - start) / 2;
    merge_sort(slice, start, mid, tracker);
    merge_sort(slice, mid, end, tracker);
    merge(slice, start, mid, end, tracker);
}

/// Merges the sorted runs `slice[start..mid]` and `slice[mid..end]`.
fn merge<T>(slice: &mut [T], start: usize, mid: usize, end: usize, tracker: &mut Tracker<'_, T>)
where
    T: Ord + Clone,
{
    let mut left = start;
    let mut right = mid;

    while left < right && right < end {
        if slice[left] > slice[right] {
            slice[left..=right].rotate_right(1);
            right += 1;
        }
        left += 1;
        tracker.emit(slice);
    }
}

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        merge_sort(slice, 0, slice.len(), tracker);
        Ok(())
    }
}

use crate::{Result, Sorter, Tracker};

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use sortvis_orst::{HeapSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Algorithm
///
/// The slice is first rearranged into a binary max-heap. The root, being the largest element,
/// is then swapped to the end of the heap, the heap shrinks by one and the new root sinks back
/// down. Every swap, both while sinking and while extracting, is reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter;

/// Sinks `slice[root]` until neither child within `slice[..len]` is larger.
fn sift_down<T>(slice: &mut [T], len: usize, mut root: usize, tracker: &mut Tracker<'_, T>)
where
    T: Ord + Clone,
{
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && slice[left] > slice[largest] {
            largest = left;
        }
        if right < len && slice[right] > slice[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        tracker.swap(slice, root, largest);
        root = largest;
    }
}

impl<T> Sorter<T> for HeapSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        let len = slice.len();

        for root in (0..len / 2).rev() {
            sift_down(slice, len, root, tracker);
        }

        for end in (1..len).rev() {
            tracker.swap(slice, 0, end);
            sift_down(slice, end, 0, tracker);
        }

        Ok(())
    }
}

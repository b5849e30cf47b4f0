use crate::{Result, Sorter, Tracker};

/// An implementation of [Comb Sort](https://en.wikipedia.org/wiki/Comb_sort)
///
/// # Usage
///```
/// use sortvis_orst::{CombSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// CombSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Comb sort compares elements a `gap` apart instead of neighbours, shrinking the gap by a
/// factor of 1.3 after every pass. Once the gap is down to one it behaves like bubble sort and
/// finishes on the first pass that swaps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct CombSorter;

/// `gap * SHRINK_NUM / SHRINK_DEN` is `floor(gap / 1.3)`.
const SHRINK_NUM: usize = 10;
const SHRINK_DEN: usize = 13;

impl<T> Sorter<T> for CombSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        let len = slice.len();
        let mut gap = len;
        let mut sorted = false;

        while !sorted {
            gap = gap * SHRINK_NUM / SHRINK_DEN;
            if gap <= 1 {
                gap = 1;
                sorted = true;
            }

            for i in 0..len.saturating_sub(gap) {
                if slice[i] > slice[i + gap] {
                    tracker.swap(slice, i, i + gap);
                    sorted = false;
                }
            }
        }

        Ok(())
    }
}

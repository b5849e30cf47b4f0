use crate::{Result, Sorter, Tracker};

/// An implementation of [Cocktail Shaker Sort](https://en.wikipedia.org/wiki/Cocktail_shaker_sort)
///
/// # Usage
///```
/// use sortvis_orst::{CocktailShakerSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// CocktailShakerSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// A bubble sort that alternates direction. The forward pass carries the largest element to the
/// end, the backward pass carries the smallest one to the front, and both ends of the unsorted
/// window close in by one. Sorting stops as soon as a pass makes no swap.
#[derive(Debug, Default, Clone, Copy)]
pub struct CocktailShakerSorter;

impl<T> Sorter<T> for CocktailShakerSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        if slice.len() < 2 {
            return Ok(());
        }

        let mut start = 0;
        let mut end = slice.len() - 1;

        loop {
            let mut swapped = false;
            for i in start..end {
                if slice[i] > slice[i + 1] {
                    tracker.swap(slice, i, i + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
            end -= 1;

            swapped = false;
            for i in (start..end).rev() {
                if slice[i] > slice[i + 1] {
                    tracker.swap(slice, i, i + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
            start += 1;
        }

        Ok(())
    }
}

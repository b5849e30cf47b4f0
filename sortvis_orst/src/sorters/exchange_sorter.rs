use crate::{Result, Sorter, Tracker};

/// Exchange sort: the brute-force cousin of selection sort.
///
/// Every position `i` is compared with every later position `j`, and the pair is swapped
/// whenever it is out of order. Each swap is reported.
///
/// # Usage
///```
/// use sortvis_orst::{ExchangeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ExchangeSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct ExchangeSorter;

impl<T> Sorter<T> for ExchangeSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        for i in 0..slice.len() {
            for j in (i + 1)..slice.len() {
                if slice[i] > slice[j] {
                    tracker.swap(slice, i, j);
                }
            }
        }

        Ok(())
    }
}

use crate::{Result, Sorter, Tracker};

/// An implementation of [Shell Sort](https://en.wikipedia.org/wiki/Shellsort)
///
/// Insertion sort over elements that are `gap` apart, with the gap starting at half the length
/// and halving until it reaches one. Every gapped swap is reported.
///
/// # Usage
///```
/// use sortvis_orst::{ShellSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ShellSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellSorter;

impl<T> Sorter<T> for ShellSorter
where
    T: Ord + Clone,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        let len = slice.len();
        let mut gap = len / 2;

        while gap > 0 {
            for unsorted in gap..len {
                let mut i = unsorted;
                while i >= gap && slice[i] < slice[i - gap] {
                    tracker.swap(slice, i, i - gap);
                    i -= gap;
                }
            }
            gap /= 2;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sorters::test_support::{assert_frames_consistent, record};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        ShellSorter.sort(&mut slice).unwrap();
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        ShellSorter.sort(&mut slice).unwrap();
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        ShellSorter.sort(&mut one).unwrap();
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        ShellSorter.sort(&mut two).unwrap();
        assert_eq!(two, vec![1, 2]);
    }

    #[test]
    fn wide_gap_moves_first() {
        let input = [4, 3, 2, 1];
        let (sorted, frames) = record(&ShellSorter, &input);

        assert_eq!(sorted, vec![1, 2, 3, 4]);
        // gap 2 swaps 4 with 2 before any neighbours are compared
        assert_eq!(frames[0], vec![2, 3, 4, 1]);
        assert_frames_consistent(&input, &frames);
    }
}

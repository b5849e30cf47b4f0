use crate::sorters::reject_negative;
use crate::{Error, IntKey, Result, Sorter, Tracker};

/// Largest value range counting sort will allocate count slots for.
pub const MAX_COUNTING_RANGE: u64 = 1 << 24;

/// An implementation of [Counting Sort](https://en.wikipedia.org/wiki/Counting_sort)
///
/// # Usage
///```
/// use sortvis_orst::{CountingSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// CountingSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Counting sort never compares two elements. It counts how often every value between the
/// minimum and the maximum occurs, turns the counts into a running total, and uses the total to
/// drop each element straight into its final position.
///
/// The whole result is built in one pass off to the side, so on its own there would be nothing
/// to watch. The result is replayed into the slice one element at a time instead, taking a
/// snapshot after each.
///
/// Negative values are rejected with [`Error::NegativeValue`], and a value range wider than
/// [`MAX_COUNTING_RANGE`] with [`Error::RangeTooLarge`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingSorter;

impl<T> Sorter<T> for CountingSorter
where
    T: IntKey,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        reject_negative(slice, "counting")?;

        let (Some(min), Some(max)) = (
            slice.iter().map(|v| v.to_i64()).min(),
            slice.iter().map(|v| v.to_i64()).max(),
        ) else {
            return Ok(());
        };

        let range = (max - min) as u64 + 1;
        if range > MAX_COUNTING_RANGE {
            return Err(Error::RangeTooLarge {
                range,
                limit: MAX_COUNTING_RANGE,
            });
        }

        let slot = |value: &T| (value.to_i64() - min) as usize;

        let mut counts = vec![0usize; range as usize];
        for value in slice.iter() {
            counts[slot(value)] += 1;
        }
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }

        let mut output = slice.to_vec();
        for value in slice.iter().rev() {
            let index = slot(value);
            counts[index] -= 1;
            output[counts[index]] = *value;
        }

        tracker.replay(slice, &output);
        Ok(())
    }
}

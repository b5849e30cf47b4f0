use crate::sorters::reject_negative;
use crate::{IntKey, Result, Sorter, Tracker};

const RADIX: i64 = 10;

/// An implementation of least significant digit [Radix Sort](https://en.wikipedia.org/wiki/Radix_sort)
///
/// # Usage
///```
/// use sortvis_orst::{RadixSorter, Sorter};
///
/// let mut slice = [170, 45, 75, 90, 802, 24, 2, 66];
/// RadixSorter.sort(&mut slice).unwrap();
/// assert_eq!(slice, [2, 24, 45, 66, 75, 90, 170, 802]);
///```
///
/// # Explanation
///
/// Elements are distributed into ten buckets by their last decimal digit and collected back in
/// bucket order, then the same happens for the tens digit, the hundreds digit and so on up to
/// the number of digits of the maximum. Because every pass keeps the order of the previous one
/// inside a bucket, the slice is sorted after the last pass.
///
/// Each pass is replayed into the slice one element at a time with a snapshot after each
/// placement. A maximum of zero still counts as one digit, so an all-zero slice gets a single
/// pass. Negative values are rejected with [`Error::NegativeValue`](crate::Error::NegativeValue).
#[derive(Debug, Default, Clone, Copy)]
pub struct RadixSorter;

/// Number of decimal digits in `value`; zero has one.
fn digit_count(mut value: i64) -> u32 {
    let mut digits = 1;
    while value >= RADIX {
        value /= RADIX;
        digits += 1;
    }
    digits
}

impl<T> Sorter<T> for RadixSorter
where
    T: IntKey,
{
    fn sort_tracked(&self, slice: &mut [T], tracker: &mut Tracker<'_, T>) -> Result<()> {
        reject_negative(slice, "radix")?;

        let Some(max) = slice.iter().map(|v| v.to_i64()).max() else {
            return Ok(());
        };

        let mut place: i64 = 1;
        for _ in 0..digit_count(max) {
            let mut buckets: [Vec<T>; RADIX as usize] = Default::default();
            for value in slice.iter() {
                let digit = (value.to_i64() / place) % RADIX;
                buckets[digit as usize].push(*value);
            }

            let output = buckets.into_iter().flatten().collect::<Vec<_>>();
            tracker.replay(slice, &output);
            place = place.saturating_mul(RADIX);
        }

        Ok(())
    }
}

pub mod bubble_sorter;
pub mod cocktail_shaker_sorter;
pub mod comb_sorter;
pub mod counting_sorter;
pub mod exchange_sorter;
pub mod heap_sorter;
pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod radix_sorter;
pub mod selection_sorter;
pub mod shell_sorter;

use crate::{Error, IntKey, Result};

/// Distribution sorts cannot bucket negative numbers.
pub(crate) fn reject_negative<T: IntKey>(slice: &[T], algorithm: &'static str) -> Result<()> {
    match slice.iter().map(|v| v.to_i64()).find(|v| *v < 0) {
        Some(value) => Err(Error::NegativeValue { algorithm, value }),
        None => Ok(()),
    }
}

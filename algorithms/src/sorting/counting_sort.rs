//! Counting sort over a bounded integer range.
//!
//! Variables:
//!   min, max : i64    — extreme values of the input
//!   R        : usize  — max - min + 1, size of the count table
//!
//! Equations:
//!   count[v - min] = |{ i : arr[i] = v }|
//!   output = concat(repeat(min + k, count[k]) for k in 0..R)   O(N + R)

use crate::error::{AlgorithmError, Result};

/// Largest count table `counting_sort` will allocate.
pub const DEFAULT_MAX_RANGE: u64 = 1 << 24;

pub fn counting_sort(arr: &mut [i64]) -> Result<()> {
    counting_sort_bounded(arr, DEFAULT_MAX_RANGE)
}

/// Fails with `Domain` before touching `arr` when `max - min + 1` exceeds
/// `max_range`.
pub fn counting_sort_bounded(arr: &mut [i64], max_range: u64) -> Result<()> {
    let (Some(&min), Some(&max)) = (arr.iter().min(), arr.iter().max()) else {
        return Ok(());
    };
    let range = value_range(min, max);
    if range > u128::from(max_range) {
        return Err(AlgorithmError::Domain(format!(
            "counting sort range {range} exceeds {max_range}"
        )));
    }

    let mut count = vec![0usize; range as usize];
    for &v in arr.iter() {
        count[offset(v, min)] += 1;
    }

    let mut index = 0;
    for (k, &c) in count.iter().enumerate() {
        let value = (i128::from(min) + k as i128) as i64;
        arr[index..index + c].fill(value);
        index += c;
    }
    Ok(())
}

/// Number of distinct integers in `[min, max]`.
pub fn value_range(min: i64, max: i64) -> u128 {
    (i128::from(max) - i128::from(min) + 1) as u128
}

fn offset(v: i64, min: i64) -> usize {
    (i128::from(v) - i128::from(min)) as usize
}

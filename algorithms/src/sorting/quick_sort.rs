//! Lomuto quicksort with a fixed last-element pivot.
//!
//! Sub-ranges wait on an explicit stack instead of the call stack, so
//! adversarial input (already sorted, descending) costs O(N^2) time but only
//! O(N) heap, never stack depth.

use crate::error::{AlgorithmError, Result};

pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() > 1 {
        let right = arr.len() - 1;
        sort_inclusive(arr, 0, right);
    }
}

/// Sorts `arr[left..=right]`. `left > right` is a no-op.
pub fn quick_sort_range<T: Ord>(arr: &mut [T], left: usize, right: usize) -> Result<()> {
    if left > right {
        return Ok(());
    }
    if right >= arr.len() {
        return Err(AlgorithmError::Range(format!(
            "bounds [{left}, {right}] outside sequence of length {}",
            arr.len()
        )));
    }
    sort_inclusive(arr, left, right);
    Ok(())
}

fn sort_inclusive<T: Ord>(arr: &mut [T], left: usize, right: usize) {
    let mut pending = vec![(left, right)];
    while let Some((lo, hi)) = pending.pop() {
        if lo >= hi {
            continue;
        }
        let pivot = lo + partition(&mut arr[lo..=hi]);
        if pivot > lo {
            pending.push((lo, pivot - 1));
        }
        pending.push((pivot + 1, hi));
    }
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let len = arr.len();
    let pivot_index = len - 1;
    let mut i = 0;
    for j in 0..pivot_index {
        if arr[j] <= arr[pivot_index] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, pivot_index);
    i
}

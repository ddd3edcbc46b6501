//! Linear search with the loop bound replaced by a sentinel.
//!
//! Variables:
//!   last : T  — original arr[N-1], restored before returning
//!
//! Equations:
//!   arr[N-1] <- target;  i = min{ i : arr[i] = target }
//!   found  <=>  i < N-1  or  last = target

pub fn sentinel_search<T: PartialEq + Copy>(arr: &mut [T], target: T) -> Option<usize> {
    let last_index = arr.len().checked_sub(1)?;
    let last = arr[last_index];
    arr[last_index] = target;

    let mut index = 0;
    while arr[index] != target {
        index += 1;
    }
    arr[last_index] = last;

    if index < last_index || last == target {
        Some(index)
    } else {
        None
    }
}

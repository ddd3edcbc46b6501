//! Write-minimising cycle sort.
//!
//! Variables:
//!   item : T      — value currently held out of the array
//!   pos  : usize  — cycle_start + |{ i > cycle_start : arr[i] < item }|
//!
//! Equations:
//!   every value is written at most once into its final slot
//!   equal values are placed after those already in place (pos skips them)

use std::mem;

pub fn cycle_sort<T: Ord + Copy>(arr: &mut [T]) {
    let len = arr.len();
    for cycle_start in 0..len.saturating_sub(1) {
        let mut item = arr[cycle_start];

        let mut pos = final_position(arr, cycle_start, &item);
        if pos == cycle_start {
            continue;
        }
        while item == arr[pos] {
            pos += 1;
        }
        mem::swap(&mut item, &mut arr[pos]);

        while pos != cycle_start {
            pos = final_position(arr, cycle_start, &item);
            while pos != cycle_start && item == arr[pos] {
                pos += 1;
            }
            if item != arr[pos] {
                mem::swap(&mut item, &mut arr[pos]);
            }
        }
    }
}

fn final_position<T: Ord>(arr: &[T], cycle_start: usize, item: &T) -> usize {
    cycle_start + arr[cycle_start + 1..].iter().filter(|v| *v < item).count()
}

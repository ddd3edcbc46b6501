//! Bubble sort over a shrinking gap.
//!
//! Equations:
//!   gap' = max(floor(gap * 10 / 13), 1)        shrink factor 1.3
//!   terminates when gap = 1 and a pass makes no swap

pub fn comb_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    let mut gap = len;
    let mut swapped = true;

    while gap != 1 || swapped {
        gap = next_gap(gap);
        swapped = false;
        for i in 0..len.saturating_sub(gap) {
            if arr[i] > arr[i + gap] {
                arr.swap(i, i + gap);
                swapped = true;
            }
        }
    }
}

fn next_gap(gap: usize) -> usize {
    (gap * 10 / 13).max(1)
}

//! Gapped insertion sort.
//!
//! Equations:
//!   gaps = N/2, N/4, ..., 1
//!   after pass g: arr[i-g] <= arr[i] for all i >= g

pub fn shell_sort<T: Ord + Copy>(arr: &mut [T]) {
    let len = arr.len();
    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let temp = arr[i];
            let mut j = i;
            while j >= gap && arr[j - gap] > temp {
                arr[j] = arr[j - gap];
                j -= gap;
            }
            arr[j] = temp;
        }
        gap /= 2;
    }
}

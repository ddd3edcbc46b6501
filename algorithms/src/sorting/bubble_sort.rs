/// Stable. Each pass bubbles the largest remaining value to the end of the
/// unsorted prefix; a pass without swaps ends the sort (O(N) on sorted input).
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut unsorted = arr.len();
    let mut swapped = true;
    while swapped {
        swapped = false;
        for j in 1..unsorted {
            if arr[j - 1] > arr[j] {
                arr.swap(j - 1, j);
                swapped = true;
            }
        }
        unsorted = unsorted.saturating_sub(1);
    }
}

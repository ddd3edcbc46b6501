/// Requires ascending input. Inclusive bounds, `mid = low + (high - low) / 2`.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0, arr.len() - 1);
    while low <= high {
        let mid = low + (high - low) / 2;
        if &arr[mid] == target {
            return Some(mid);
        }
        if &arr[mid] > target {
            if mid == 0 {
                return None;
            }
            high = mid - 1;
        } else {
            low = mid + 1;
        }
    }
    None
}

/// Requires ascending input. Splits `[low, high]` into thirds at
/// `m1 = low + (high-low)/3` and `m2 = high - (high-low)/3`.
pub fn ternary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0, arr.len() - 1);
    while low <= high {
        let third = (high - low) / 3;
        let m1 = low + third;
        let m2 = high - third;

        if &arr[m1] == target {
            return Some(m1);
        }
        if &arr[m2] == target {
            return Some(m2);
        }

        if target < &arr[m1] {
            if m1 == 0 {
                return None;
            }
            high = m1 - 1;
        } else if target > &arr[m2] {
            low = m2 + 1;
        } else {
            if m2 == 0 {
                return None;
            }
            low = m1 + 1;
            high = m2 - 1;
        }
    }
    None
}

//! Interpolation search over ascending integers.
//!
//! Equations:
//!   pos = low + (target - arr[low]) * (high - low) / (arr[high] - arr[low])
//!   loop only while arr[low] < arr[high] and arr[low] <= target <= arr[high],
//!   so the divisor is never zero and low <= pos <= high.

pub fn interpolation_search(arr: &[i64], target: i64) -> Option<usize> {
    let mut low = 0;
    let mut high = arr.len().checked_sub(1)?;

    while low <= high && arr[low] != arr[high] && arr[low] <= target && target <= arr[high] {
        let pos = low + probe_offset(arr[low], arr[high], high - low, target);
        if arr[pos] < target {
            low = pos + 1;
        } else if arr[pos] > target {
            if pos == 0 {
                return None;
            }
            high = pos - 1;
        } else {
            return Some(pos);
        }
    }

    if low <= high && arr[low] == target {
        return Some(low);
    }
    None
}

fn probe_offset(low_value: i64, high_value: i64, span: usize, target: i64) -> usize {
    let numerator = (i128::from(target) - i128::from(low_value)) * span as i128;
    let denominator = i128::from(high_value) - i128::from(low_value);
    (numerator / denominator) as usize
}

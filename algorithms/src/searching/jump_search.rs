//! Block jump search over ascending input.
//!
//! Variables:
//!   step : usize  — floor(sqrt(N)), at least 1
//!
//! Equations:
//!   jump while arr[min(k*step, N) - 1] < target                O(sqrt N)
//!   then scan [ (k-1)*step, min(k*step, N) ) linearly          O(sqrt N)

pub fn jump_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let len = arr.len();
    if len == 0 {
        return None;
    }
    let step = ((len as f64).sqrt() as usize).max(1);
    let mut prev = 0;
    let mut block_end = step;

    while &arr[block_end.min(len) - 1] < target {
        prev = block_end;
        block_end += step;
        if prev >= len {
            return None;
        }
    }

    while &arr[prev] < target {
        prev += 1;
        if prev == block_end.min(len) {
            return None;
        }
    }

    (&arr[prev] == target).then_some(prev)
}

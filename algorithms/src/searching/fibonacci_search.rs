//! Fibonacci search over ascending input.
//!
//! Variables:
//!   f2, f1, f0 : usize  — consecutive Fibonacci numbers, f0 = f1 + f2
//!   offset     : Option<usize> — last index known to hold a value < target
//!
//! Equations:
//!   start with the smallest f0 >= N
//!   probe = min(offset + f2, N - 1)                 (offset = -1 initially)
//!   arr[probe] < target: shift down one step, offset = probe
//!   arr[probe] > target: shift down two steps

pub fn fibonacci_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let len = arr.len();
    let (mut f2, mut f1) = (0usize, 1usize);
    let mut f0 = f2 + f1;
    while f0 < len {
        f2 = f1;
        f1 = f0;
        f0 = f2 + f1;
    }

    // Index just past the last value known to be below target.
    let mut base = 0usize;
    while f0 > 1 {
        let probe = (base + f2).saturating_sub(1).min(len.checked_sub(1)?);
        if &arr[probe] < target {
            f0 = f1;
            f1 = f2;
            f2 = f0 - f1;
            base = probe + 1;
        } else if &arr[probe] > target {
            f0 = f2;
            f1 -= f2;
            f2 = f0 - f1;
        } else {
            return Some(probe);
        }
    }

    if f1 != 0 && arr.get(base) == Some(target) {
        return Some(base);
    }
    None
}

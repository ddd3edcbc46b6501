//! Greatest common divisor by Euclid's algorithm.
//!
//! Equations:
//!   gcd(a, 0) = |a|
//!   gcd(a, b) = gcd(b, a mod b)
//!   gcd(0, 0) = 0
//!
//! Both forms work on absolute values, so `i64::MIN` needs no special case.

pub fn iterative_gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Recursion depth is bounded by O(log min(|a|, |b|)), under 100 frames for
/// any pair of `i64`.
pub fn recursive_gcd(a: i64, b: i64) -> u64 {
    euclid(a.unsigned_abs(), b.unsigned_abs())
}

fn euclid(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        euclid(b, a % b)
    }
}

//! Fibonacci numbers.
//!
//! Equations:
//!   F(0) = 0,  F(1) = 1,  F(n) = F(n-1) + F(n-2)
//!   computed bottom-up in O(n); F(186) is the largest that fits in u128

use crate::error::{AlgorithmError, Result};

pub fn fibonacci(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(AlgorithmError::Domain(format!("fibonacci of negative index {n}")));
    }
    if n == 0 {
        return Ok(0);
    }
    let (mut prev, mut curr): (u128, u128) = (0, 1);
    for _ in 1..n {
        let next = prev
            .checked_add(curr)
            .ok_or_else(|| AlgorithmError::Domain(format!("F({n}) overflows u128")))?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

use crate::error::{AlgorithmError, Result};

/// n! by iterative accumulation. Fails for negative `n` and when the product
/// leaves `u128` (n > 34).
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(AlgorithmError::Domain(format!("factorial of negative number {n}")));
    }
    let mut acc: u128 = 1;
    for k in 2..=n as u128 {
        acc = acc
            .checked_mul(k)
            .ok_or_else(|| AlgorithmError::Domain(format!("{n}! overflows u128")))?;
    }
    Ok(acc)
}

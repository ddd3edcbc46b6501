use crate::error::{AlgorithmError, Result};

/// All primes `<= threshold`, ascending.
pub fn sieve(threshold: i64) -> Result<Vec<u64>> {
    if threshold < 0 {
        return Err(AlgorithmError::Domain(format!("sieve threshold {threshold} is negative")));
    }
    let n = usize::try_from(threshold)
        .map_err(|_| AlgorithmError::Domain(format!("sieve threshold {threshold} exceeds address space")))?;
    if n < 2 {
        return Ok(Vec::new());
    }

    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    for i in 2..=((n as f64).sqrt() as usize) {
        if is_prime[i] {
            for j in (i * i..=n).step_by(i) {
                is_prime[j] = false;
            }
        }
    }

    Ok(is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| if p { Some(i as u64) } else { None })
        .collect())
}

//! Text <-> integer sequence codec.
//!
//! Wire format: integers separated by single ASCII spaces, no leading or
//! trailing delimiter.
//!
//! Equations:
//!   parse(s)  = [i64(t) for t in split_whitespace(s)]     O(|s|)
//!   format(a) = join(" ", a)                               O(N)
//!   parse(format(a)) = a

use crate::error::{AlgorithmError, Result};

pub fn parse(text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|e| AlgorithmError::Format(format!("`{token}` is not an integer: {e}")))
        })
        .collect()
}

/// `None` stands for an absent sequence and is rejected; an empty slice
/// formats to the empty string.
pub fn format(sequence: Option<&[i64]>) -> Result<String> {
    let sequence = sequence.ok_or(AlgorithmError::NullInput)?;
    let mut out = String::with_capacity(sequence.len() * 4);
    for (i, value) in sequence.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&value.to_string());
    }
    Ok(out)
}

//! Scytale transposition cipher.
//!
//! Variables:
//!   key  : usize  — number of rows (rod circumference)
//!   cols : usize  — ceil(len / key)
//!
//! Equations:
//!   text padded with ' ' to key * cols characters, laid out row-major:
//!     grid[row][col] = text[col + cols * row]
//!   encrypt reads the grid column-major; decrypt writes it back row-major
//!   and strips the trailing padding spaces

use super::Mode;
use crate::error::{AlgorithmError, Result};

pub fn scytale(text: &str, key: i64, mode: Mode) -> Result<String> {
    if key <= 0 {
        return Err(AlgorithmError::Range(format!("scytale key {key} must be positive")));
    }
    let key = usize::try_from(key)
        .map_err(|_| AlgorithmError::Range(format!("scytale key {key} exceeds address space")))?;

    let mut chars: Vec<char> = text.chars().collect();
    let remainder = chars.len() % key;
    if remainder > 0 {
        chars.resize(chars.len() + key - remainder, ' ');
    }
    let cols = chars.len() / key;

    match mode {
        Mode::Encrypt => {
            let mut out = String::with_capacity(chars.len());
            for col in 0..cols {
                for row in 0..key {
                    out.push(chars[col + cols * row]);
                }
            }
            Ok(out)
        }
        Mode::Decrypt => {
            let mut grid = vec![' '; chars.len()];
            let mut read = chars.iter();
            for col in 0..cols {
                for row in 0..key {
                    if let Some(&c) = read.next() {
                        grid[col + cols * row] = c;
                    }
                }
            }
            let plain: String = grid.into_iter().collect();
            Ok(plain.trim_end_matches(' ').to_string())
        }
    }
}

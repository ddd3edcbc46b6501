//! Vigenere polyalphabetic cipher.
//!
//! Variables:
//!   K   : [u8]   — uppercased key, each letter a shift in 0..26
//!   k   : usize  — number of letters transformed so far
//!
//! Equations:
//!   encrypt: c' = (c + K[k mod |K|]) mod 26
//!   decrypt: c' = (c - K[k mod |K|]) mod 26
//!   non-letters are copied and do not advance k

use super::{shift_letter, Mode};
use crate::error::{AlgorithmError, Result};

pub fn vigenere(text: &str, key: &str, mode: Mode) -> Result<String> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AlgorithmError::Range(format!(
            "vigenere key `{key}` must be a non-empty string of ASCII letters"
        )));
    }
    let shifts: Vec<u8> = key.to_ascii_uppercase().bytes().map(|b| b - b'A').collect();

    let mut out = String::with_capacity(text.len());
    let mut k = 0;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let shift = shifts[k % shifts.len()];
            let shift = match mode {
                Mode::Encrypt => shift,
                Mode::Decrypt => (26 - shift) % 26,
            };
            out.push(shift_letter(c, shift));
            k += 1;
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

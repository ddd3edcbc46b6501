use super::{shift_letter, Mode};
use crate::error::{AlgorithmError, Result};

pub const MAX_KEY: i64 = 25;

/// Shifts ASCII letters by `key` (forward to encrypt, backward to decrypt)
/// within their own case, wrapping mod 26.
pub fn caesar(text: &str, key: i64, mode: Mode) -> Result<String> {
    if !(0..=MAX_KEY).contains(&key) {
        return Err(AlgorithmError::Range(format!("caesar key {key} outside 0..={MAX_KEY}")));
    }
    let key = key as u8;
    let shift = match mode {
        Mode::Encrypt => key,
        Mode::Decrypt => (26 - key) % 26,
    };
    Ok(text.chars().map(|c| shift_letter(c, shift)).collect())
}

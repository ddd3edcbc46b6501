//! Classical ciphers over text.
//!
//! Letter arithmetic applies to ASCII letters only; every other character is
//! copied through unchanged.

pub mod a1z26;
pub mod atbash;
pub mod caesar;
pub mod mode;
pub mod rot13;
pub mod scytale;
pub mod vigenere;

pub use mode::Mode;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AlgorithmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CipherAlgorithm {
    Caesar,
    Vigenere,
    Scytale,
    Atbash,
    Rot13,
    A1z26,
}

impl CipherAlgorithm {
    pub const ALL: [CipherAlgorithm; 6] = [
        CipherAlgorithm::Caesar,
        CipherAlgorithm::Vigenere,
        CipherAlgorithm::Scytale,
        CipherAlgorithm::Atbash,
        CipherAlgorithm::Rot13,
        CipherAlgorithm::A1z26,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CipherAlgorithm::Caesar => "caesar",
            CipherAlgorithm::Vigenere => "vigenere",
            CipherAlgorithm::Scytale => "scytale",
            CipherAlgorithm::Atbash => "atbash",
            CipherAlgorithm::Rot13 => "rot13",
            CipherAlgorithm::A1z26 => "a1z26",
        }
    }

    pub fn is_self_inverse(self) -> bool {
        matches!(self, CipherAlgorithm::Atbash | CipherAlgorithm::Rot13)
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == wanted)
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm { family: "cipher", name: s.to_string() })
    }
}

/// `b'A'` or `b'a'` for ASCII letters.
fn letter_base(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(b'A')
    } else if c.is_ascii_lowercase() {
        Some(b'a')
    } else {
        None
    }
}

/// Rotates an ASCII letter forward by `shift` (< 26) within its case.
fn shift_letter(c: char, shift: u8) -> char {
    match letter_base(c) {
        Some(base) => (base + (c as u8 - base + shift) % 26) as char,
        None => c,
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlgorithmError;

/// Direction of a cipher transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => f.write_str("Encrypt"),
            Mode::Decrypt => f.write_str("Decrypt"),
        }
    }
}

/// Case-insensitive; anything but `encrypt` / `decrypt` is `InvalidMode`.
impl FromStr for Mode {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            _ => Err(AlgorithmError::InvalidMode(s.to_string())),
        }
    }
}

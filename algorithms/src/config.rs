//! Resource limits for untrusted input, loaded from `algorithms.toml`.
//!
//! ```toml
//! [limits]
//! max_sequence_len    = 1000000
//! max_counting_range  = 16777216
//! max_permutation_len = 9
//! max_sieve_threshold = 10000000
//! max_text_len        = 1000000
//! max_quadratic_len   = 20000
//! max_prime_candidate = 100000000000000
//! ```
//!
//! Missing keys fall back to their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::sorting::counting_sort::DEFAULT_MAX_RANGE;

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "algorithms.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlgorithmsConfig {
    pub limits: Limits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Elements in a sort or search sequence.
    pub max_sequence_len: usize,
    /// `max - min + 1` for counting sort.
    pub max_counting_range: u64,
    /// Characters fed to permutation enumeration (N! outputs).
    pub max_permutation_len: usize,
    pub max_sieve_threshold: u64,
    /// Characters of cipher or string input, and the scytale key.
    pub max_text_len: usize,
    /// Elements fed to the O(N^2) sorts (bubble, selection, insertion,
    /// cycle, and quick on presorted input).
    pub max_quadratic_len: usize,
    /// Largest `n` for trial-division primality, about sqrt(n) divisions.
    pub max_prime_candidate: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_sequence_len: 1_000_000,
            max_counting_range: DEFAULT_MAX_RANGE,
            max_permutation_len: 9,
            max_sieve_threshold: 10_000_000,
            max_text_len: 1_000_000,
            max_quadratic_len: 20_000,
            max_prime_candidate: 100_000_000_000_000,
        }
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<AlgorithmsConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    parse_config(&raw)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))
}

pub fn parse_config(raw: &str) -> anyhow::Result<AlgorithmsConfig> {
    Ok(toml::from_str(raw)?)
}

/// Loads `./algorithms.toml` when present.
///
/// Returns `AlgorithmsConfig::default()` when the file is missing or broken.
pub fn discover_and_load() -> AlgorithmsConfig {
    discover_in(Path::new("."))
}

pub fn discover_in(dir: &Path) -> AlgorithmsConfig {
    let path: PathBuf = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        debug!("no config file found, using defaults");
        return AlgorithmsConfig::default();
    }
    debug!(path = %path.display(), "loading config");
    match load_config(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            AlgorithmsConfig::default()
        }
    }
}

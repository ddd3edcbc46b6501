//! Index lookup in integer sequences.
//!
//! Binary, interpolation, ternary, Fibonacci and jump search assume ascending
//! input and never sort it themselves.

pub mod binary_search;
pub mod fibonacci_search;
pub mod interpolation_search;
pub mod jump_search;
pub mod linear_search;
pub mod sentinel_search;
pub mod ternary_search;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AlgorithmError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    Binary,
    Linear,
    Interpolation,
    Ternary,
    Fibonacci,
    Sentinel,
    Jump,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 7] = [
        SearchAlgorithm::Binary,
        SearchAlgorithm::Linear,
        SearchAlgorithm::Interpolation,
        SearchAlgorithm::Ternary,
        SearchAlgorithm::Fibonacci,
        SearchAlgorithm::Sentinel,
        SearchAlgorithm::Jump,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Binary => "binary",
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::Interpolation => "interpolation",
            SearchAlgorithm::Ternary => "ternary",
            SearchAlgorithm::Fibonacci => "fibonacci",
            SearchAlgorithm::Sentinel => "sentinel",
            SearchAlgorithm::Jump => "jump",
        }
    }

    pub fn requires_sorted(self) -> bool {
        !matches!(self, SearchAlgorithm::Linear | SearchAlgorithm::Sentinel)
    }

    /// `arr` is only borrowed mutably for sentinel search, which restores it
    /// before returning.
    pub fn search(self, arr: &mut [i64], target: i64) -> Option<usize> {
        match self {
            SearchAlgorithm::Binary => binary_search::binary_search(arr, &target),
            SearchAlgorithm::Linear => linear_search::linear_search(arr, &target),
            SearchAlgorithm::Interpolation => interpolation_search::interpolation_search(arr, target),
            SearchAlgorithm::Ternary => ternary_search::ternary_search(arr, &target),
            SearchAlgorithm::Fibonacci => fibonacci_search::fibonacci_search(arr, &target),
            SearchAlgorithm::Sentinel => sentinel_search::sentinel_search(arr, target),
            SearchAlgorithm::Jump => jump_search::jump_search(arr, &target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix("-search").unwrap_or(&wanted);
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == wanted)
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm { family: "search", name: s.to_string() })
    }
}

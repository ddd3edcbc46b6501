//! In-place ascending sorts.
//!
//! Every algorithm permutes its input without changing the multiset of
//! values. Only bubble, insertion and merge sort are stable.

pub mod bubble_sort;
pub mod comb_sort;
pub mod counting_sort;
pub mod cycle_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod selection_sort;
pub mod shell_sort;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AlgorithmError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    Bubble,
    Quick,
    Selection,
    Insertion,
    Cycle,
    Counting,
    Comb,
    Shell,
    Heap,
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 10] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Quick,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Cycle,
        SortAlgorithm::Counting,
        SortAlgorithm::Comb,
        SortAlgorithm::Shell,
        SortAlgorithm::Heap,
        SortAlgorithm::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Cycle => "cycle",
            SortAlgorithm::Counting => "counting",
            SortAlgorithm::Comb => "comb",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Merge => "merge",
        }
    }

    pub fn is_stable(self) -> bool {
        matches!(self, SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge)
    }

    /// Worst case O(N^2). Quick sort lands there on sorted or reversed input
    /// because its pivot is the last element.
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble
                | SortAlgorithm::Quick
                | SortAlgorithm::Selection
                | SortAlgorithm::Insertion
                | SortAlgorithm::Cycle
        )
    }

    /// Only counting sort can fail (range too large for its count table).
    pub fn sort(self, arr: &mut [i64]) -> Result<()> {
        self.sort_bounded(arr, counting_sort::DEFAULT_MAX_RANGE)
    }

    /// Like [`sort`](Self::sort) with an explicit counting sort range bound.
    pub fn sort_bounded(self, arr: &mut [i64], max_counting_range: u64) -> Result<()> {
        match self {
            SortAlgorithm::Bubble => bubble_sort::bubble_sort(arr),
            SortAlgorithm::Quick => quick_sort::quick_sort(arr),
            SortAlgorithm::Selection => selection_sort::selection_sort(arr),
            SortAlgorithm::Insertion => insertion_sort::insertion_sort(arr),
            SortAlgorithm::Cycle => cycle_sort::cycle_sort(arr),
            SortAlgorithm::Counting => return counting_sort::counting_sort_bounded(arr, max_counting_range),
            SortAlgorithm::Comb => comb_sort::comb_sort(arr),
            SortAlgorithm::Shell => shell_sort::shell_sort(arr),
            SortAlgorithm::Heap => heap_sort::heap_sort(arr),
            SortAlgorithm::Merge => merge_sort::merge_sort(arr),
        }
        Ok(())
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix("-sort").unwrap_or(&wanted);
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == wanted)
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm { family: "sort", name: s.to_string() })
    }
}

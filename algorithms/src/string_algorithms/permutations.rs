//! Distinct character permutations.
//!
//! Variables:
//!   idx : [usize]  — permutation of 0..N, stepped in lexicographic order
//!
//! Equations:
//!   output = dedup_first([ text[idx[0]] text[idx[1]] ... for idx in lex(0..N) ])
//!
//! Lexicographic index order is exactly the order of "take char i, permute
//! the rest, prepend", so "abc" yields abc, acb, bac, bca, cab, cba. Each
//! string keeps the position of its first occurrence.

use indexmap::IndexSet;

pub fn every_unique_permutation(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut idx: Vec<usize> = (0..chars.len()).collect();
    let mut seen = IndexSet::new();

    loop {
        seen.insert(idx.iter().map(|&i| chars[i]).collect::<String>());
        if !next_permutation(&mut idx) {
            break;
        }
    }
    seen.into_iter().collect()
}

/// Advances `idx` to its lexicographic successor; false once it was the last.
fn next_permutation(idx: &mut [usize]) -> bool {
    let Some(pivot) = idx.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = idx.iter().rposition(|&v| v > idx[pivot]) else {
        return false;
    };
    idx.swap(pivot, successor);
    idx[pivot + 1..].reverse();
    true
}

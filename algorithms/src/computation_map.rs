use serde::Serialize;

/// Mapping of modules in algorithms/src to type of computation
/// and the property callers must know about
pub const ALGORITHMS_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Codec
    ("codec.rs", "Sequence encoding", "Round-trip"),
    // Sorting
    ("sorting/bubble_sort.rs", "Sorting", "Stable"),
    ("sorting/quick_sort.rs", "Sorting", "Unstable"),
    ("sorting/selection_sort.rs", "Sorting", "Unstable"),
    ("sorting/insertion_sort.rs", "Sorting", "Stable"),
    ("sorting/cycle_sort.rs", "Sorting", "Unstable"),
    ("sorting/counting_sort.rs", "Sorting", "Bounded range"),
    ("sorting/comb_sort.rs", "Sorting", "Unstable"),
    ("sorting/shell_sort.rs", "Sorting", "Unstable"),
    ("sorting/heap_sort.rs", "Sorting", "Unstable"),
    ("sorting/merge_sort.rs", "Sorting", "Stable"),
    // Searching
    ("searching/binary_search.rs", "Search", "Sorted input"),
    ("searching/linear_search.rs", "Search", "Last match"),
    (
        "searching/interpolation_search.rs",
        "Search",
        "Sorted input",
    ),
    ("searching/ternary_search.rs", "Search", "Sorted input"),
    ("searching/fibonacci_search.rs", "Search", "Sorted input"),
    ("searching/sentinel_search.rs", "Search", "Any input"),
    ("searching/jump_search.rs", "Search", "Sorted input"),
    // Numerical
    (
        "numerical/factorial.rs",
        "Numerical computation",
        "Non-negative input",
    ),
    (
        "numerical/fibonacci.rs",
        "Numerical computation",
        "Non-negative input",
    ),
    ("numerical/gcd.rs", "Numerical computation", "Any input"),
    ("numerical/primality.rs", "Numerical computation", "Any input"),
    (
        "numerical/sieve.rs",
        "Numerical computation",
        "Non-negative input",
    ),
    // Cryptography
    ("cryptography/caesar.rs", "Substitution cipher", "Keyed"),
    ("cryptography/vigenere.rs", "Substitution cipher", "Keyed"),
    ("cryptography/scytale.rs", "Transposition cipher", "Keyed"),
    ("cryptography/atbash.rs", "Substitution cipher", "Self-inverse"),
    ("cryptography/rot13.rs", "Substitution cipher", "Self-inverse"),
    ("cryptography/a1z26.rs", "Encoding cipher", "Format-sensitive"),
    // String algorithms
    (
        "string_algorithms/palindrome.rs",
        "String inspection",
        "Case-insensitive",
    ),
    (
        "string_algorithms/reverse.rs",
        "String transformation",
        "Any input",
    ),
    (
        "string_algorithms/permutations.rs",
        "Combinatorial enumeration",
        "Deduplicated",
    ),
    (
        "string_algorithms/substring.rs",
        "String pattern matching",
        "Overlapping hits",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub path: &'static str,
    pub computation: &'static str,
    pub property: &'static str,
}

pub fn entries() -> impl Iterator<Item = CatalogEntry> {
    ALGORITHMS_COMPUTATION_MAP
        .iter()
        .map(|&(path, computation, property)| CatalogEntry { path, computation, property })
}

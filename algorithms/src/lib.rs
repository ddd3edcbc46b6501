//! # Algorithms Crate
//!
//! Classic computer-science algorithms organized by category.
//!
//! ## Modules
//!
//! - `codec` – Whitespace-delimited integer text <-> sequence
//! - `sorting` – In-place ordering (bubble, quick, selection, insertion, cycle, counting, comb, shell, heap, merge)
//! - `searching` – Index lookup (binary, linear, interpolation, ternary, Fibonacci, sentinel, jump)
//! - `numerical` – Factorial, Fibonacci, GCD, primality, sieve of Eratosthenes
//! - `cryptography` – Classical ciphers (Caesar, Vigenere, Scytale, Atbash, ROT13, A1Z26)
//! - `string_algorithms` – Palindromes, reversal, permutations, substring search & replace
//! - `computation_map` – Catalog of every algorithm module
//! - `config` – Resource limits for untrusted input
//! - `runner` – Limit checks, timing and serializable reports around the above
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algorithms::sorting::merge_sort::merge_sort;
//! use algorithms::searching::binary_search::binary_search;
//!
//! let mut values = [3, 1, 2];
//! merge_sort(&mut values);
//! assert_eq!(values, [1, 2, 3]);
//! assert_eq!(binary_search(&values, &2), Some(1));
//! ```
//!
//! ---
//!
//! Every algorithm is pure and synchronous; none recurses proportionally to
//! its input size.

pub mod codec;
pub mod computation_map;
pub mod config;
pub mod cryptography;
pub mod error;
pub mod numerical;
pub mod runner;
pub mod searching;
pub mod sorting;
pub mod string_algorithms;

pub use error::{AlgorithmError, Result};

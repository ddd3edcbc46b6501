//! Entry point for callers holding raw text input.
//!
//! The runner decodes input with the codec, enforces [`Limits`] before any
//! algorithm starts, sorts sequences for searches that need sorted input,
//! times the algorithm call and wraps everything in a serializable
//! [`Report`].

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::codec;
use crate::config::Limits;
use crate::cryptography::{a1z26, atbash, caesar, rot13, scytale, vigenere, CipherAlgorithm, Mode};
use crate::error::{AlgorithmError, Result};
use crate::numerical::{factorial, fibonacci, gcd, primality, sieve};
use crate::searching::SearchAlgorithm;
use crate::sorting::SortAlgorithm;
use crate::string_algorithms::{palindrome, permutations, reverse, substring};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<T> {
    pub algorithm: String,
    pub elapsed: Duration,
    #[serde(flatten)]
    pub outcome: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOutcome {
    pub input: String,
    pub sorted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub item: i64,
    /// The sequence as searched; sorted first when the algorithm needs it.
    pub array: String,
    pub index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOperation {
    Factorial(i64),
    Fibonacci(i64),
    Gcd { a: i64, b: i64, recursive: bool },
    IsPrime(i64),
    Sieve(i64),
}

impl MathOperation {
    pub fn name(&self) -> &'static str {
        match self {
            MathOperation::Factorial(_) => "factorial",
            MathOperation::Fibonacci(_) => "fibonacci",
            MathOperation::Gcd { recursive: false, .. } => "iterative-gcd",
            MathOperation::Gcd { recursive: true, .. } => "recursive-gcd",
            MathOperation::IsPrime(_) => "is-prime",
            MathOperation::Sieve(_) => "sieve-of-eratosthenes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MathValue {
    Number(u128),
    Flag(bool),
    Primes(Vec<u64>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MathOutcome {
    pub result: MathValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherOutcome {
    pub mode: Mode,
    pub key: Option<String>,
    pub text: String,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringOperation {
    Palindrome(String),
    Reverse(String),
    Permutations(String),
    Find { text: String, pattern: String },
    Replace { text: String, pattern: String, replacement: String },
}

impl StringOperation {
    pub fn name(&self) -> &'static str {
        match self {
            StringOperation::Palindrome(_) => "is-palindrome",
            StringOperation::Reverse(_) => "reverse-string",
            StringOperation::Permutations(_) => "every-unique-permutation",
            StringOperation::Find { .. } => "find-substring",
            StringOperation::Replace { .. } => "replace-substring",
        }
    }

    fn text(&self) -> &str {
        match self {
            StringOperation::Palindrome(text)
            | StringOperation::Reverse(text)
            | StringOperation::Permutations(text)
            | StringOperation::Find { text, .. }
            | StringOperation::Replace { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StringValue {
    Flag(bool),
    Text(String),
    Texts(Vec<String>),
    Indices(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringOutcome {
    pub result: StringValue,
}

#[derive(Debug, Clone, Default)]
pub struct Runner {
    limits: Limits,
}

impl Runner {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn sort(&self, algorithm: SortAlgorithm, numbers: &str) -> Result<Report<SortOutcome>> {
        let mut array = self.decode_sequence(numbers)?;
        if algorithm.is_quadratic() {
            check_limit("quadratic sort length", array.len() as u64, self.limits.max_quadratic_len as u64)?;
        }
        let input = codec::format(Some(&array))?;

        let max_range = self.limits.max_counting_range;
        let (sorted, elapsed) = timed(|| algorithm.sort_bounded(&mut array, max_range));
        sorted?;

        info!(algorithm = %algorithm, len = array.len(), elapsed_us = elapsed.as_micros() as u64, "sort finished");
        Ok(Report {
            algorithm: format!("{algorithm}-sort"),
            elapsed,
            outcome: SortOutcome { input, sorted: codec::format(Some(&array))? },
        })
    }

    pub fn search(&self, algorithm: SearchAlgorithm, numbers: &str, item: i64) -> Result<Report<SearchOutcome>> {
        let mut array = self.decode_sequence(numbers)?;
        if algorithm.requires_sorted() {
            debug!(algorithm = %algorithm, "sorting input before search");
            array.sort_unstable();
        }

        let (index, elapsed) = timed(|| algorithm.search(&mut array, item));

        info!(algorithm = %algorithm, item, found = index.is_some(), elapsed_us = elapsed.as_micros() as u64, "search finished");
        Ok(Report {
            algorithm: format!("{algorithm}-search"),
            elapsed,
            outcome: SearchOutcome { item, array: codec::format(Some(&array))?, index },
        })
    }

    pub fn math(&self, operation: MathOperation) -> Result<Report<MathOutcome>> {
        match operation {
            MathOperation::Sieve(threshold) if threshold > 0 => {
                check_limit("sieve threshold", threshold as u64, self.limits.max_sieve_threshold)?;
            }
            MathOperation::IsPrime(n) if n > 0 => {
                check_limit("prime candidate", n as u64, self.limits.max_prime_candidate)?;
            }
            _ => {}
        }

        let (result, elapsed) = timed(|| -> Result<MathValue> {
            Ok(match operation {
                MathOperation::Factorial(n) => MathValue::Number(factorial::factorial(n)?),
                MathOperation::Fibonacci(n) => MathValue::Number(fibonacci::fibonacci(n)?),
                MathOperation::Gcd { a, b, recursive: false } => MathValue::Number(gcd::iterative_gcd(a, b).into()),
                MathOperation::Gcd { a, b, recursive: true } => MathValue::Number(gcd::recursive_gcd(a, b).into()),
                MathOperation::IsPrime(n) => MathValue::Flag(primality::is_prime(n)),
                MathOperation::Sieve(threshold) => MathValue::Primes(sieve::sieve(threshold)?),
            })
        });
        let result = result?;

        info!(algorithm = operation.name(), elapsed_us = elapsed.as_micros() as u64, "math finished");
        Ok(Report { algorithm: operation.name().to_string(), elapsed, outcome: MathOutcome { result } })
    }

    /// `key` is required by caesar, scytale (integers) and vigenere (letters)
    /// and ignored by the others.
    pub fn cipher(
        &self,
        algorithm: CipherAlgorithm,
        text: &str,
        key: Option<&str>,
        mode: Mode,
    ) -> Result<Report<CipherOutcome>> {
        self.check_text(text)?;

        let (result, elapsed) = timed(|| -> Result<(String, Option<String>)> {
            Ok(match algorithm {
                CipherAlgorithm::Caesar => {
                    let key = integer_key(algorithm, key)?;
                    (caesar::caesar(text, key, mode)?, Some(key.to_string()))
                }
                CipherAlgorithm::Vigenere => {
                    let key = key.ok_or_else(|| missing_key(algorithm))?;
                    (vigenere::vigenere(text, key, mode)?, Some(key.to_ascii_uppercase()))
                }
                CipherAlgorithm::Scytale => {
                    let key = integer_key(algorithm, key)?;
                    if key > 0 {
                        check_limit("scytale key", key as u64, self.limits.max_text_len as u64)?;
                    }
                    (scytale::scytale(text, key, mode)?, Some(key.to_string()))
                }
                CipherAlgorithm::Atbash => (atbash::atbash(text, mode), None),
                CipherAlgorithm::Rot13 => (rot13::rot13(text, mode), None),
                CipherAlgorithm::A1z26 => (a1z26::a1z26(text, mode)?, None),
            })
        });
        let (result, key) = result?;

        info!(algorithm = %algorithm, mode = %mode, elapsed_us = elapsed.as_micros() as u64, "cipher finished");
        Ok(Report {
            algorithm: algorithm.to_string(),
            elapsed,
            outcome: CipherOutcome { mode, key, text: text.to_string(), result },
        })
    }

    pub fn strings(&self, operation: StringOperation) -> Result<Report<StringOutcome>> {
        self.check_text(operation.text())?;
        if let StringOperation::Permutations(text) = &operation {
            check_limit(
                "permutation input length",
                text.chars().count() as u64,
                self.limits.max_permutation_len as u64,
            )?;
        }

        let (result, elapsed) = timed(|| match &operation {
            StringOperation::Palindrome(text) => StringValue::Flag(palindrome::is_palindrome(text)),
            StringOperation::Reverse(text) => StringValue::Text(reverse::reverse_string(text)),
            StringOperation::Permutations(text) => {
                StringValue::Texts(permutations::every_unique_permutation(text))
            }
            StringOperation::Find { text, pattern } => {
                StringValue::Indices(substring::find_substring(text, pattern))
            }
            StringOperation::Replace { text, pattern, replacement } => {
                StringValue::Text(substring::replace_substring(text, pattern, replacement))
            }
        });

        info!(algorithm = operation.name(), elapsed_us = elapsed.as_micros() as u64, "string operation finished");
        Ok(Report { algorithm: operation.name().to_string(), elapsed, outcome: StringOutcome { result } })
    }

    fn decode_sequence(&self, numbers: &str) -> Result<Vec<i64>> {
        let array = codec::parse(numbers)?;
        check_limit("sequence length", array.len() as u64, self.limits.max_sequence_len as u64)?;
        Ok(array)
    }

    fn check_text(&self, text: &str) -> Result<()> {
        check_limit("text length", text.chars().count() as u64, self.limits.max_text_len as u64)
    }
}

fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

fn check_limit(what: &'static str, value: u64, limit: u64) -> Result<()> {
    if value > limit {
        debug!(what, value, limit, "limit exceeded");
        return Err(AlgorithmError::LimitExceeded { what, value, limit });
    }
    Ok(())
}

fn missing_key(algorithm: CipherAlgorithm) -> AlgorithmError {
    AlgorithmError::Range(format!("{algorithm} requires a key"))
}

fn integer_key(algorithm: CipherAlgorithm, key: Option<&str>) -> Result<i64> {
    let key = key.ok_or_else(|| missing_key(algorithm))?;
    key.trim()
        .parse()
        .map_err(|_| AlgorithmError::Format(format!("{algorithm} key `{key}` is not an integer")))
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "algorithms", about = "Classic algorithms with timing reports", version)]
pub struct Cli {
    /// Limits file; defaults to ./algorithms.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Tracing filter, overridden by RUST_LOG.
    #[arg(long = "log-level", global = true, default_value = "warn")]
    pub log_level: String,
    /// Print reports as single-line JSON.
    #[arg(long, global = true)]
    pub compact: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sort space-separated integers.
    Sort {
        algorithm: String,
        #[arg(allow_hyphen_values = true)]
        numbers: String,
    },
    /// Find an integer in space-separated integers.
    Search {
        algorithm: String,
        #[arg(allow_hyphen_values = true)]
        numbers: String,
        #[arg(long, allow_hyphen_values = true)]
        item: i64,
    },
    Math {
        #[command(subcommand)]
        operation: MathCommand,
    },
    /// Encrypt or decrypt text with a classical cipher.
    Cipher {
        algorithm: String,
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(long)]
        mode: String,
        #[arg(long, allow_hyphen_values = true)]
        key: Option<String>,
    },
    Strings {
        #[command(subcommand)]
        operation: StringsCommand,
    },
    /// List every algorithm module.
    Catalog,
}

#[derive(Subcommand)]
pub enum MathCommand {
    Factorial {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    Fibonacci {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    Gcd {
        #[arg(allow_hyphen_values = true)]
        a: i64,
        #[arg(allow_hyphen_values = true)]
        b: i64,
        #[arg(long)]
        recursive: bool,
    },
    IsPrime {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    Sieve {
        #[arg(allow_hyphen_values = true)]
        threshold: i64,
    },
}

#[derive(Subcommand)]
pub enum StringsCommand {
    Palindrome { text: String },
    Reverse { text: String },
    Permutations { text: String },
    Find { text: String, pattern: String },
    Replace { text: String, pattern: String, replacement: String },
}

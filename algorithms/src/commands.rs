use anyhow::{bail, Context};
use serde::Serialize;
use tracing::debug;

use algorithms::computation_map;
use algorithms::config::{self, AlgorithmsConfig};
use algorithms::cryptography::{CipherAlgorithm, Mode};
use algorithms::runner::{MathOperation, Runner, StringOperation};
use algorithms::searching::SearchAlgorithm;
use algorithms::sorting::SortAlgorithm;

use crate::cli::{Cli, Command, MathCommand, StringsCommand};

pub fn execute_command(cli: Cli) -> anyhow::Result<()> {
    let cfg = load_config(&cli)?;
    let runner = Runner::new(cfg.limits);
    debug!(limits = ?runner.limits(), "effective limits");
    let compact = cli.compact;

    match cli.command {
        Command::Sort { algorithm, numbers } => {
            require_non_empty("numbers", &numbers)?;
            let algorithm: SortAlgorithm = algorithm.parse()?;
            print_json(&runner.sort(algorithm, &numbers)?, compact)
        }
        Command::Search { algorithm, numbers, item } => {
            require_non_empty("numbers", &numbers)?;
            let algorithm: SearchAlgorithm = algorithm.parse()?;
            print_json(&runner.search(algorithm, &numbers, item)?, compact)
        }
        Command::Math { operation } => {
            let operation = match operation {
                MathCommand::Factorial { n } => MathOperation::Factorial(n),
                MathCommand::Fibonacci { n } => MathOperation::Fibonacci(n),
                MathCommand::Gcd { a, b, recursive } => MathOperation::Gcd { a, b, recursive },
                MathCommand::IsPrime { n } => MathOperation::IsPrime(n),
                MathCommand::Sieve { threshold } => MathOperation::Sieve(threshold),
            };
            print_json(&runner.math(operation)?, compact)
        }
        Command::Cipher { algorithm, text, mode, key } => {
            require_non_empty("text", &text)?;
            let algorithm: CipherAlgorithm = algorithm.parse()?;
            let mode: Mode = mode.parse()?;
            print_json(&runner.cipher(algorithm, &text, key.as_deref(), mode)?, compact)
        }
        Command::Strings { operation } => {
            let operation = match operation {
                StringsCommand::Palindrome { text } => StringOperation::Palindrome(text),
                StringsCommand::Reverse { text } => StringOperation::Reverse(text),
                StringsCommand::Permutations { text } => StringOperation::Permutations(text),
                StringsCommand::Find { text, pattern } => {
                    require_non_empty("pattern", &pattern)?;
                    StringOperation::Find { text, pattern }
                }
                StringsCommand::Replace { text, pattern, replacement } => {
                    require_non_empty("pattern", &pattern)?;
                    StringOperation::Replace { text, pattern, replacement }
                }
            };
            print_json(&runner.strings(operation)?, compact)
        }
        Command::Catalog => {
            let entries: Vec<_> = computation_map::entries().collect();
            print_json(&entries, compact)
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AlgorithmsConfig> {
    match &cli.config {
        Some(path) => config::load_config(path),
        None => Ok(config::discover_and_load()),
    }
}

fn require_non_empty(what: &str, value: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        bail!("{what} must not be empty");
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let out = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("serialize report")?;
    println!("{out}");
    Ok(())
}

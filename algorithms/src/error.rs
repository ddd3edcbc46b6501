use thiserror::Error;

/// Every failure an algorithm call can produce.
///
/// Calls that fail leave their inputs untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    #[error("domain error: {0}")]
    Domain(String),
    #[error("range error: {0}")]
    Range(String),
    #[error("invalid mode `{0}`, expected `Encrypt` or `Decrypt`")]
    InvalidMode(String),
    #[error("format error: {0}")]
    Format(String),
    #[error("sequence must be present")]
    NullInput,
    #[error("{what} is {value}, limit is {limit}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        limit: u64,
    },
    #[error("unknown {family} algorithm `{name}`")]
    UnknownAlgorithm { family: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, AlgorithmError>;

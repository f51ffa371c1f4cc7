//! Crate-level error types.

use std::fmt;

/// Errors produced by the sortviz crate.
#[derive(Debug)]
pub enum SortvizError {
    /// The step protocol's cursor invariants were violated. Signals a
    /// driver bug (e.g. the dataset was mutated out of band between
    /// steps), never a runtime data error — fatal, not retryable.
    InvariantViolation(String),
    /// Invalid configuration values.
    Config(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for SortvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation(msg) => {
                write!(f, "step invariant violated: {msg}")
            }
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SortvizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SortvizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

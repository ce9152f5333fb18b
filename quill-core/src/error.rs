//! Layered error types
//!
//! Rule and configuration failures live below the engine; `EngineError` is
//! the single type surfaced by the processor facade.

use std::time::Duration;
use thiserror::Error;

/// A lexical rule collaborator failed to evaluate
///
/// Analyzers never propagate this; they log it and contribute no matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A term list could not be compiled into a matcher
    #[error("invalid pattern for {category}: {reason}")]
    InvalidPattern {
        /// The rule category whose pattern failed
        category: String,
        /// Why compilation failed
        reason: String,
    },

    /// The collaborator rejected the input
    #[error("rule evaluation failed: {0}")]
    Evaluation(String),
}

/// Rule-set configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("failed to parse rule set: {0}")]
    Parse(#[from] toml::de::Error),

    /// The rule file could not be read
    #[error("failed to read {path}: {reason}")]
    Read {
        /// The rule file path
        path: String,
        /// The underlying I/O failure
        reason: String,
    },

    /// Parsed but semantically invalid
    #[error("invalid rule set: {0}")]
    Invalid(String),
}

/// Analyzer chain misconfiguration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A text-rewriting analyzer appears before the end of the chain
    #[error("analyzer '{name}' rewrites chunk text and must run last (found at position {position})")]
    RewriterNotLast {
        /// Analyzer name
        name: String,
        /// Zero-based position in the chain
        position: usize,
    },

    /// The chain has no analyzers
    #[error("pipeline has no analyzers")]
    Empty,
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rule configuration error
    #[error("rule configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline configuration error
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// The join barrier did not complete within the caller's budget
    #[error("analysis did not finish within {budget:?}")]
    Timeout {
        /// The wall-clock budget that was exceeded
        budget: Duration,
    },

    /// The worker pool could not be built or died before reporting
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::Encoding(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

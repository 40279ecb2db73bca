//! Error type shared across the harness.

use thiserror::Error;

/// Errors produced while running experiments or loading results.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Invalid experiment configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The external program could not be spawned or waited on.
    #[error("program invocation failed: {0}")]
    Invocation(String),

    /// A trial exceeded the configured timeout.
    #[error("trial timed out after {0}")]
    Timeout(String),

    /// The run was cancelled.
    #[error("run cancelled")]
    Cancelled,

    /// File system failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The results file did not match the expected schema.
    #[error("malformed results file, line {line}: {reason}")]
    MalformedResults {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

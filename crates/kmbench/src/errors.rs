//! Error handling and exit codes.

use kmbench_core::exit_codes;
use kmbench_core::BenchError;

/// Map a benchmarking error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &BenchError) -> i32 {
    match err {
        BenchError::Config(_) => exit_codes::ERROR_CONFIG,
        BenchError::Cancelled => exit_codes::ERROR_CANCELED,
        BenchError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        BenchError::Invocation(_) | BenchError::Io(_) | BenchError::MalformedResults { .. } => {
            exit_codes::ERROR_GENERIC
        }
    }
}

//! # kmbench-core
//!
//! Data model for the K-means speed-up benchmarking harness: the measurement
//! grid, the timing-output parser, per-cell trial statistics, and the results
//! table with its on-disk schema.

pub mod cancel;
pub mod constants;
pub mod error;
pub mod grid;
pub mod results;
pub mod stats;
pub mod timing;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{exit_codes, RESULTS_FILE, RESULTS_HEADER};
pub use error::BenchError;
pub use grid::{data_file_name, Cell, ExperimentGrid};
pub use results::{ResultRow, ResultsTable};
pub use stats::CellSamples;
pub use timing::{parse_trial_output, TrialTimes};

//! # kmbench-harness
//!
//! Invokes the external clustering program as a scoped, timeout-bounded
//! process, sweeps the measurement grid one trial at a time, and records a
//! run manifest beside the results.

pub mod experiment;
pub mod manifest;
pub mod program;

pub use experiment::{ExperimentReport, ExperimentRunner, SkippedCell, TrialProgress};
pub use manifest::RunManifest;
pub use program::ClusteringProgram;

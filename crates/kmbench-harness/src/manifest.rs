//! Run manifest persisted beside the results file.
//!
//! Records what was measured and on which machine, so a results file found
//! months later can still be interpreted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use kmbench_core::grid::ExperimentGrid;
use kmbench_core::BenchError;

use crate::experiment::ExperimentReport;

/// Current manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

/// Snapshot of one benchmarking run: configuration echo plus machine info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    /// Manifest format version for compatibility checking.
    pub version: u32,
    /// Run timestamp.
    pub timestamp: String,
    /// CPU model of the measuring machine.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// Path of the external program that was measured.
    pub program: String,
    /// Input sizes swept.
    pub sizes: Vec<u64>,
    /// Thread counts swept.
    pub threads: Vec<u32>,
    /// Cluster count passed to the program.
    pub clusters: u32,
    /// Trials required per cell.
    pub trials: u32,
    /// Results file the manifest describes.
    pub results_file: String,
    /// Cells that produced a row.
    pub cells_written: usize,
    /// Cells omitted as incomplete.
    pub cells_skipped: usize,
}

impl RunManifest {
    /// Build a manifest for a finished sweep.
    #[must_use]
    pub fn for_run(
        grid: &ExperimentGrid,
        program: &str,
        clusters: u32,
        results_file: &str,
        report: &ExperimentReport,
    ) -> Self {
        Self {
            version: MANIFEST_VERSION,
            timestamp: current_timestamp(),
            cpu_model: cpu_model(),
            num_cores: num_cores(),
            program: program.to_string(),
            sizes: grid.sizes.clone(),
            threads: grid.threads.clone(),
            clusters,
            trials: grid.trials,
            results_file: results_file.to_string(),
            cells_written: report.table.len(),
            cells_skipped: report.skipped.len(),
        }
    }

    /// Check if this manifest was written by the current format version.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == MANIFEST_VERSION
    }
}

/// Save a manifest as pretty-printed JSON.
pub fn save_manifest(manifest: &RunManifest, path: &Path) -> Result<(), BenchError> {
    let content =
        serde_json::to_string_pretty(manifest).map_err(std::io::Error::other)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a manifest, returning `None` when missing or unreadable.
#[must_use]
pub fn load_manifest(path: &Path) -> Option<RunManifest> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn num_cores() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}

/// CPU model string of the measuring machine.
fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_default()
}

fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmbench_core::ResultsTable;
    use std::time::Duration;

    fn sample_manifest() -> RunManifest {
        let grid = ExperimentGrid::new(vec![100_000], vec![1, 4], 10).unwrap();
        let report = ExperimentReport {
            table: ResultsTable::new(),
            skipped: Vec::new(),
            missing_sizes: Vec::new(),
            elapsed: Duration::from_secs(1),
        };
        RunManifest::for_run(&grid, "./kmeans_compare", 5, "experiments_results.csv", &report)
    }

    #[test]
    fn manifest_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("experiments_manifest.json");

        let manifest = sample_manifest();
        save_manifest(&manifest, &path).unwrap();

        let loaded = load_manifest(&path).unwrap();
        assert!(loaded.is_compatible());
        assert_eq!(loaded.sizes, vec![100_000]);
        assert_eq!(loaded.threads, vec![1, 4]);
        assert_eq!(loaded.trials, 10);
        assert_eq!(loaded.clusters, 5);
    }

    #[test]
    fn load_missing_returns_none() {
        assert!(load_manifest(Path::new("/nonexistent/manifest.json")).is_none());
    }

    #[test]
    fn load_invalid_json_returns_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_manifest(&path).is_none());
    }

    #[test]
    fn version_mismatch_detected() {
        let mut manifest = sample_manifest();
        manifest.version = 999;
        assert!(!manifest.is_compatible());
    }

    #[test]
    fn timestamp_format() {
        assert!(current_timestamp().starts_with("unix:"));
    }
}

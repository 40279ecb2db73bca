//! Compiled-in experiment defaults and process exit codes.

/// Default dataset sizes (points per dataset) to sweep.
pub const DEFAULT_POINT_SIZES: [u64; 7] = [
    100_000, 200_000, 300_000, 400_000, 600_000, 800_000, 1_000_000,
];

/// Default thread counts to sweep.
pub const DEFAULT_THREAD_COUNTS: [u32; 4] = [1, 4, 8, 16];

/// Default cluster count passed to the external program.
pub const DEFAULT_CLUSTERS: u32 = 5;

/// Default number of trials every grid cell must complete.
pub const DEFAULT_TRIALS: u32 = 10;

/// Default path of the external clustering executable.
pub const DEFAULT_PROGRAM: &str = "./kmeans_compare";

/// Output label argument passed to the external program on every trial.
pub const OUTPUT_LABEL: &str = "results";

/// Mode argument requesting both the serial and the parallel run.
pub const MODE_BOTH: &str = "both";

/// Default results file name.
pub const RESULTS_FILE: &str = "experiments_results.csv";

/// Fixed header of the results file.
pub const RESULTS_HEADER: &str = "nPoints,nThreads,avgTimeSerial,avgTimeParallel,speedUp";

/// Run manifest file name, written next to the results file.
pub const MANIFEST_FILE: &str = "experiments_manifest.json";

/// Default dataset size selected by the time-comparison chart.
pub const DEFAULT_PLOT_SIZE: u64 = 800_000;

/// Exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A trial exceeded its timeout.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Run cancelled by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_nonempty() {
        assert!(!DEFAULT_POINT_SIZES.is_empty());
        assert!(!DEFAULT_THREAD_COUNTS.is_empty());
        assert!(DEFAULT_TRIALS > 0);
    }

    #[test]
    fn plot_size_is_a_default_size() {
        assert!(DEFAULT_POINT_SIZES.contains(&DEFAULT_PLOT_SIZE));
    }

    #[test]
    fn header_has_five_fields() {
        assert_eq!(RESULTS_HEADER.split(',').count(), 5);
    }
}

//! The sequential experiment sweep.
//!
//! Trials run strictly one at a time: overlapping child processes would
//! contend for cores and corrupt the timing measurements.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use kmbench_core::grid::{data_file_name, Cell, ExperimentGrid};
use kmbench_core::stats::CellSamples;
use kmbench_core::timing;
use kmbench_core::{BenchError, CancellationToken, ResultsTable};

use crate::program::ClusteringProgram;

/// Progress callback invoked before every trial.
pub type ProgressCallback = Box<dyn Fn(TrialProgress) + Send>;

/// Position within the sweep, for progress display.
#[derive(Debug, Clone, Copy)]
pub struct TrialProgress {
    /// The cell being measured.
    pub cell: Cell,
    /// 0-based index of the cell within the sweep.
    pub cell_index: usize,
    /// Total number of cells in the grid.
    pub cell_count: usize,
    /// 1-based trial number within the cell.
    pub trial: u32,
    /// Trials required per cell.
    pub trials: u32,
}

impl TrialProgress {
    /// 0-based absolute trial index across the whole sweep.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.cell_index as u64 * u64::from(self.trials) + u64::from(self.trial - 1)
    }
}

/// A cell that produced no row because it fell short of the trial count.
#[derive(Debug, Clone, Copy)]
pub struct SkippedCell {
    /// The incomplete cell.
    pub cell: Cell,
    /// Valid trials collected before the cell was given up.
    pub valid_trials: u32,
}

/// Outcome of a full sweep.
#[derive(Debug)]
pub struct ExperimentReport {
    /// Rows for every cell that completed all trials.
    pub table: ResultsTable,
    /// Cells omitted for falling short of the trial count.
    pub skipped: Vec<SkippedCell>,
    /// Sizes skipped entirely because their dataset was absent.
    pub missing_sizes: Vec<u64>,
    /// Wall-clock duration of the sweep.
    pub elapsed: Duration,
}

/// Runs the measurement grid against the external program.
pub struct ExperimentRunner {
    grid: ExperimentGrid,
    program: ClusteringProgram,
    data_dir: PathBuf,
    progress: Option<ProgressCallback>,
}

impl ExperimentRunner {
    /// Create a runner over `grid`, reading datasets from `data_dir`.
    #[must_use]
    pub fn new(
        grid: ExperimentGrid,
        program: ClusteringProgram,
        data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            grid,
            program,
            data_dir: data_dir.into(),
            progress: None,
        }
    }

    /// Set a progress callback.
    #[must_use]
    pub fn with_progress(mut self, cb: ProgressCallback) -> Self {
        self.progress = Some(cb);
        self
    }

    /// Execute the full sweep.
    ///
    /// Failures degrade and continue: a missing dataset skips its size, a
    /// malformed or timed-out trial is discarded, and a cell that ends up
    /// short of the configured trial count is omitted from the table.
    /// Cancellation and a program that cannot be spawned abort the run.
    pub fn run(&self, cancel: &CancellationToken) -> Result<ExperimentReport, BenchError> {
        let started = Instant::now();
        let mut table = ResultsTable::new();
        let mut skipped = Vec::new();
        let mut missing_sizes = Vec::new();

        let cell_count = self.grid.cell_count();
        let mut cell_index = 0usize;

        for &points in &self.grid.sizes {
            let input = self.data_dir.join(data_file_name(points));
            if !input.exists() {
                tracing::warn!(
                    points,
                    path = %input.display(),
                    "dataset not found, skipping size"
                );
                missing_sizes.push(points);
                cell_index += self.grid.threads.len();
                continue;
            }

            for &threads in &self.grid.threads {
                cancel.check_cancelled()?;
                let cell = Cell { points, threads };
                let samples = self.run_cell(cell, &input, cell_index, cell_count, cancel)?;

                if samples.is_complete(self.grid.trials) {
                    table.push(samples.aggregate(points, threads));
                } else {
                    tracing::warn!(
                        points,
                        threads,
                        valid = samples.len(),
                        required = self.grid.trials,
                        "incomplete cell, omitting row"
                    );
                    #[allow(clippy::cast_possible_truncation)]
                    skipped.push(SkippedCell {
                        cell,
                        valid_trials: samples.len() as u32,
                    });
                }
                cell_index += 1;
            }
        }

        Ok(ExperimentReport {
            table,
            skipped,
            missing_sizes,
            elapsed: started.elapsed(),
        })
    }

    fn run_cell(
        &self,
        cell: Cell,
        input: &Path,
        cell_index: usize,
        cell_count: usize,
        cancel: &CancellationToken,
    ) -> Result<CellSamples, BenchError> {
        tracing::info!(points = cell.points, threads = cell.threads, "measuring cell");
        let mut samples = CellSamples::new();

        for trial in 1..=self.grid.trials {
            cancel.check_cancelled()?;
            self.report_progress(TrialProgress {
                cell,
                cell_index,
                cell_count,
                trial,
                trials: self.grid.trials,
            });

            match self.program.run_trial(input, cell.threads) {
                Ok(output) => match timing::parse_trial_output(&output) {
                    Ok(times) => samples.record(times),
                    Err(e) => tracing::warn!(
                        points = cell.points,
                        threads = cell.threads,
                        trial,
                        error = %e,
                        "discarding trial with unparseable output"
                    ),
                },
                Err(BenchError::Timeout(after)) => tracing::warn!(
                    points = cell.points,
                    threads = cell.threads,
                    trial,
                    timeout = %after,
                    "discarding timed-out trial"
                ),
                Err(e) => return Err(e),
            }
        }
        Ok(samples)
    }

    fn report_progress(&self, progress: TrialProgress) {
        if let Some(cb) = &self.progress {
            cb(progress);
        }
    }
}

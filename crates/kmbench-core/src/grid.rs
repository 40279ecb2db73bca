//! The measurement grid: input sizes crossed with thread counts.

use crate::error::BenchError;

/// One (input size, thread count) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Points in the input dataset.
    pub points: u64,
    /// Thread count handed to the external program.
    pub threads: u32,
}

/// Ordered sweep of input sizes and thread counts, plus the trial count every
/// cell must reach before it contributes a results row.
#[derive(Debug, Clone)]
pub struct ExperimentGrid {
    /// Input sizes, in sweep order.
    pub sizes: Vec<u64>,
    /// Thread counts, in sweep order.
    pub threads: Vec<u32>,
    /// Required valid trials per cell.
    pub trials: u32,
}

impl ExperimentGrid {
    /// Build a grid, rejecting configurations that could never produce a row.
    pub fn new(sizes: Vec<u64>, threads: Vec<u32>, trials: u32) -> Result<Self, BenchError> {
        if sizes.is_empty() {
            return Err(BenchError::Config("no input sizes configured".into()));
        }
        if threads.is_empty() {
            return Err(BenchError::Config("no thread counts configured".into()));
        }
        if sizes.iter().any(|&s| s == 0) {
            return Err(BenchError::Config("input sizes must be positive".into()));
        }
        if threads.iter().any(|&t| t == 0) {
            return Err(BenchError::Config("thread counts must be positive".into()));
        }
        if trials == 0 {
            return Err(BenchError::Config("trial count must be positive".into()));
        }
        Ok(Self {
            sizes,
            threads,
            trials,
        })
    }

    /// Cells in sweep order: sizes outer, thread counts inner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.sizes.iter().flat_map(move |&points| {
            self.threads
                .iter()
                .map(move |&threads| Cell { points, threads })
        })
    }

    /// Number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.sizes.len() * self.threads.len()
    }

    /// Total number of trials the full sweep performs.
    #[must_use]
    pub fn trial_count(&self) -> u64 {
        self.cell_count() as u64 * u64::from(self.trials)
    }
}

/// Input file name convention for a dataset of `points` points.
#[must_use]
pub fn data_file_name(points: u64) -> String {
    format!("{points}_data.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_in_sweep_order() {
        let grid = ExperimentGrid::new(vec![100, 200], vec![1, 4], 10).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(
            cells[0],
            Cell {
                points: 100,
                threads: 1
            }
        );
        assert_eq!(
            cells[1],
            Cell {
                points: 100,
                threads: 4
            }
        );
        assert_eq!(
            cells[2],
            Cell {
                points: 200,
                threads: 1
            }
        );
    }

    #[test]
    fn counts() {
        let grid = ExperimentGrid::new(vec![100, 200, 300], vec![1, 4], 10).unwrap();
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.trial_count(), 60);
    }

    #[test]
    fn rejects_empty_sizes() {
        let err = ExperimentGrid::new(vec![], vec![1], 10).unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
    }

    #[test]
    fn rejects_empty_threads() {
        assert!(ExperimentGrid::new(vec![100], vec![], 10).is_err());
    }

    #[test]
    fn rejects_zero_trials() {
        assert!(ExperimentGrid::new(vec![100], vec![1], 0).is_err());
    }

    #[test]
    fn rejects_zero_threads() {
        assert!(ExperimentGrid::new(vec![100], vec![1, 0], 10).is_err());
    }

    #[test]
    fn data_file_naming() {
        assert_eq!(data_file_name(100_000), "100000_data.csv");
        assert_eq!(data_file_name(1_000_000), "1000000_data.csv");
    }
}

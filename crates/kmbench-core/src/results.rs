//! The results table and its on-disk schema.
//!
//! One line per successfully aggregated cell, after the fixed header:
//! `nPoints,nThreads,avgTimeSerial,avgTimeParallel,speedUp`. Times carry six
//! decimals, the speed-up three. This file is the sole interface between the
//! runner and the plotters.

use std::fmt::Write as _;
use std::path::Path;

use crate::constants::RESULTS_HEADER;
use crate::error::BenchError;

/// Aggregated summary statistics for one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Points in the input dataset.
    pub points: u64,
    /// Thread count.
    pub threads: u32,
    /// Mean serial time in seconds.
    pub avg_serial: f64,
    /// Mean parallel time in seconds.
    pub avg_parallel: f64,
    /// Mean serial / mean parallel, zero when the parallel mean is zero.
    pub speedup: f64,
}

impl ResultRow {
    /// Render in the fixed file format.
    #[must_use]
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{:.6},{:.6},{:.3}",
            self.points, self.threads, self.avg_serial, self.avg_parallel, self.speedup
        )
    }

    fn parse_csv_line(line: &str, line_no: usize) -> Result<Self, BenchError> {
        let malformed = |reason: &str| BenchError::MalformedResults {
            line: line_no,
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 5 {
            return Err(malformed(&format!(
                "expected 5 fields, found {}",
                fields.len()
            )));
        }

        Ok(Self {
            points: fields[0]
                .parse()
                .map_err(|_| malformed("invalid nPoints"))?,
            threads: fields[1]
                .parse()
                .map_err(|_| malformed("invalid nThreads"))?,
            avg_serial: parse_time(fields[2]).ok_or_else(|| malformed("invalid avgTimeSerial"))?,
            avg_parallel: parse_time(fields[3])
                .ok_or_else(|| malformed("invalid avgTimeParallel"))?,
            speedup: parse_time(fields[4]).ok_or_else(|| malformed("invalid speedUp"))?,
        })
    }
}

/// Parse a non-negative finite time or ratio field.
fn parse_time(field: &str) -> Option<f64> {
    let value: f64 = field.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Ordered collection of aggregate rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, preserving insertion order.
    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    /// All rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct input sizes, ascending.
    #[must_use]
    pub fn sizes(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self.rows.iter().map(|r| r.points).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Rows for one input size, sorted by ascending thread count.
    #[must_use]
    pub fn rows_for_size(&self, points: u64) -> Vec<ResultRow> {
        let mut rows: Vec<ResultRow> = self
            .rows
            .iter()
            .filter(|r| r.points == points)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.threads);
        rows
    }

    /// Overwrite `path` with the header plus one line per row.
    pub fn save(&self, path: &Path) -> Result<(), BenchError> {
        let mut content = String::with_capacity(64 * (self.rows.len() + 1));
        content.push_str(RESULTS_HEADER);
        content.push('\n');
        for row in &self.rows {
            let _ = writeln!(content, "{}", row.to_csv_line());
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load a results file, validating the header and every row.
    pub fn load(path: &Path) -> Result<Self, BenchError> {
        let content = std::fs::read_to_string(path)?;
        let mut lines = content.lines();

        match lines.next() {
            Some(header) if header.trim_end() == RESULTS_HEADER => {}
            Some(_) => {
                return Err(BenchError::MalformedResults {
                    line: 1,
                    reason: "unexpected header".to_string(),
                })
            }
            None => {
                return Err(BenchError::MalformedResults {
                    line: 1,
                    reason: "empty file".to_string(),
                })
            }
        }

        let mut table = Self::new();
        for (idx, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            table.push(ResultRow::parse_csv_line(line.trim_end(), idx + 2)?);
        }
        Ok(table)
    }
}

//! End-of-run summary display.

use kmbench_harness::ExperimentReport;

/// Prints the sweep outcome to stdout.
pub struct SummaryPresenter {
    quiet: bool,
}

impl SummaryPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print one line per aggregated row, then the skip diagnostics.
    pub fn present(&self, report: &ExperimentReport) {
        if self.quiet {
            return;
        }

        println!("\nExperiment results:");
        println!("{:-<64}", "");
        println!(
            "{:>10} {:>8} {:>14} {:>14} {:>9}",
            "points", "threads", "serial (s)", "parallel (s)", "speed-up"
        );
        for row in report.table.rows() {
            println!(
                "{:>10} {:>8} {:>14.6} {:>14.6} {:>9.3}",
                row.points, row.threads, row.avg_serial, row.avg_parallel, row.speedup
            );
        }

        for skip in &report.skipped {
            println!(
                "  skipped {} points / {} threads (only {} valid trials)",
                skip.cell.points, skip.cell.threads, skip.valid_trials
            );
        }
        for points in &report.missing_sizes {
            println!("  skipped size {points} (dataset not found)");
        }

        println!(
            "\n{} rows in {:.1}s",
            report.table.len(),
            report.elapsed.as_secs_f64()
        );
    }
}

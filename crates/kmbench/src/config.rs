//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use kmbench_core::constants;

/// kmbench — speed-up benchmarking harness for an external K-means program.
#[derive(Parser, Debug)]
#[command(name = "kmbench", version, about)]
pub struct AppConfig {
    /// Input sizes (points per dataset) to sweep.
    #[arg(long, value_delimiter = ',', default_values_t = constants::DEFAULT_POINT_SIZES)]
    pub sizes: Vec<u64>,

    /// Thread counts to sweep.
    #[arg(long, value_delimiter = ',', default_values_t = constants::DEFAULT_THREAD_COUNTS)]
    pub threads: Vec<u32>,

    /// Cluster count passed to the external program.
    #[arg(long, default_value_t = constants::DEFAULT_CLUSTERS)]
    pub clusters: u32,

    /// Trials required per (size, threads) cell.
    #[arg(long, default_value_t = constants::DEFAULT_TRIALS, env = "KMBENCH_TRIALS")]
    pub trials: u32,

    /// Path of the external clustering executable.
    #[arg(long, default_value = constants::DEFAULT_PROGRAM, env = "KMBENCH_PROGRAM")]
    pub program: String,

    /// Directory containing the `<size>_data.csv` datasets.
    #[arg(long, default_value = ".")]
    pub data_dir: String,

    /// Results file path.
    #[arg(long, default_value = constants::RESULTS_FILE)]
    pub results: String,

    /// Per-trial timeout (e.g. "30s", "5m"); "0" disables it.
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Render the speed-up comparison chart instead of running experiments.
    #[arg(long)]
    pub plot_speedup: bool,

    /// Render the serial/parallel time chart instead of running experiments.
    #[arg(long)]
    pub plot_times: bool,

    /// Input size selected by --plot-times.
    #[arg(long, default_value_t = constants::DEFAULT_PLOT_SIZE)]
    pub size: u64,

    /// Output path for rendered charts.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (no summary, no progress bar).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Per-trial timeout; `None` when disabled.
    #[must_use]
    pub fn trial_timeout(&self) -> Option<Duration> {
        let timeout = parse_duration(&self.timeout).unwrap_or(Duration::from_secs(300));
        (!timeout.is_zero()).then_some(timeout)
    }
}

/// Parse a duration string like "5m", "1h", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n * 3600))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}

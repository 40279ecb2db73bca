//! Progress bar for the experiment sweep.

use indicatif::{ProgressBar, ProgressStyle};

use kmbench_harness::TrialProgress;

/// Create a progress bar sized to the total number of trials.
#[must_use]
pub fn sweep_bar(total_trials: u64) -> ProgressBar {
    let bar = ProgressBar::new(total_trials);
    let style = ProgressStyle::with_template(
        "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} trials {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("=>-");
    bar.set_style(style);
    bar
}

/// Update the bar for the trial about to run.
pub fn update_bar(bar: &ProgressBar, progress: &TrialProgress) {
    bar.set_position(progress.position());
    bar.set_message(format!(
        "{} points / {} threads",
        progress.cell.points, progress.cell.threads
    ));
}

//! Application entry point and dispatch.

use std::path::{Path, PathBuf};

use anyhow::Result;

use kmbench_cli::progress;
use kmbench_cli::ui;
use kmbench_cli::SummaryPresenter;
use kmbench_core::constants;
use kmbench_core::grid::ExperimentGrid;
use kmbench_core::{CancellationToken, ResultsTable};
use kmbench_harness::manifest::{save_manifest, RunManifest};
use kmbench_harness::{ClusteringProgram, ExperimentRunner};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "kmbench", &mut std::io::stdout());
        return Ok(());
    }

    if config.plot_speedup {
        return plot_speedup(config);
    }
    if config.plot_times {
        return plot_times(config);
    }

    run_experiments(config)
}

fn run_experiments(config: &AppConfig) -> Result<()> {
    let grid = ExperimentGrid::new(config.sizes.clone(), config.threads.clone(), config.trials)?;
    let program = ClusteringProgram::new(&config.program, config.clusters)
        .with_timeout(config.trial_timeout());

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    ctrlc::set_handler(move || cancel_clone.cancel())?;

    let mut runner = ExperimentRunner::new(grid.clone(), program, &config.data_dir);
    let bar = (!config.quiet).then(|| progress::sweep_bar(grid.trial_count()));
    if let Some(bar) = bar.clone() {
        runner = runner.with_progress(Box::new(move |p| progress::update_bar(&bar, &p)));
    }

    let report = runner.run(&cancel)?;
    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    let results_path = Path::new(&config.results);
    report.table.save(results_path)?;

    let manifest = RunManifest::for_run(
        &grid,
        &config.program,
        config.clusters,
        &config.results,
        &report,
    );
    save_manifest(&manifest, &manifest_path_for(results_path))?;

    SummaryPresenter::new(config.quiet).present(&report);
    if !config.quiet {
        ui::print_success(&format!(
            "results written to {}",
            results_path.display()
        ));
    }
    Ok(())
}

fn plot_speedup(config: &AppConfig) -> Result<()> {
    let table = ResultsTable::load(Path::new(&config.results))?;
    let output = config
        .output
        .clone()
        .unwrap_or_else(|| "speedup.png".to_string());
    kmbench_plot::render_speedup_chart(&table, Path::new(&output))?;
    if !config.quiet {
        ui::print_success(&format!("chart written to {output}"));
    }
    Ok(())
}

fn plot_times(config: &AppConfig) -> Result<()> {
    let table = ResultsTable::load(Path::new(&config.results))?;
    let output = config
        .output
        .clone()
        .unwrap_or_else(|| format!("times_{}.png", config.size));
    kmbench_plot::render_time_chart(&table, config.size, Path::new(&output))?;
    if !config.quiet {
        ui::print_success(&format!("chart written to {output}"));
    }
    Ok(())
}

/// Manifest path: fixed name, same directory as the results file.
fn manifest_path_for(results: &Path) -> PathBuf {
    results.with_file_name(constants::MANIFEST_FILE)
}

//! kmbench — speed-up benchmarking harness for an external K-means program.

use kmbench_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    let default_level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    // Diagnostics go to stderr; stdout is reserved for user-facing output
    // such as completion scripts and the run summary.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<kmbench_core::BenchError>()
            .map_or(kmbench_core::exit_codes::ERROR_GENERIC, errors::exit_code_for);
        std::process::exit(code);
    }
}

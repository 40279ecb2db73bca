//! End-to-end CLI integration tests.
//!
//! The external clustering program is replaced by small shell scripts that
//! emit the timing lines the harness expects.

use assert_cmd::Command;
use predicates::prelude::*;

fn kmbench() -> Command {
    Command::cargo_bin("kmbench").expect("binary not found")
}

#[test]
fn help_flag() {
    kmbench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchmarking harness"));
}

#[test]
fn version_flag() {
    kmbench()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kmbench"));
}

#[test]
fn shell_completion_bash() {
    kmbench()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kmbench"));
}

#[test]
fn zero_trials_is_a_config_error() {
    kmbench()
        .args(["--trials", "0"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn empty_sizes_is_a_config_error() {
    kmbench().args(["--sizes", ""]).assert().failure();
}

#[test]
fn plot_with_missing_results_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let missing = tmp.path().join("absent.csv");
    kmbench()
        .args(["--plot-speedup", "--results", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn plot_with_corrupt_results_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let results = tmp.path().join("bad.csv");
    std::fs::write(&results, "this,is,not\nthe,schema\n").unwrap();
    kmbench()
        .args(["--plot-speedup", "--results", results.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    const HEADER: &str = "nPoints,nThreads,avgTimeSerial,avgTimeParallel,speedUp";

    fn fake_program(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("kmeans_compare.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn touch_dataset(dir: &Path, points: u64) {
        std::fs::write(dir.join(format!("{points}_data.csv")), "x,y\n").unwrap();
    }

    const GOOD_OUTPUT: &str = "echo \"[Serial] Convergio en 10 iteraciones. Tiempo: 2.0 seg.\"\n\
echo \"[Paralelo] Convergio en 10 iteraciones. Tiempo: 1.0 seg.\"";

    #[test]
    fn full_run_writes_results_and_manifest() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch_dataset(tmp.path(), 100_000);
        let script = fake_program(tmp.path(), GOOD_OUTPUT);
        let results = tmp.path().join("results.csv");

        kmbench()
            .args([
                "--sizes",
                "100000",
                "--threads",
                "1,4",
                "--trials",
                "2",
                "--program",
                script.to_str().unwrap(),
                "--data-dir",
                tmp.path().to_str().unwrap(),
                "--results",
                results.to_str().unwrap(),
                "-q",
            ])
            .assert()
            .success();

        let content = std::fs::read_to_string(&results).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "100000,1,2.000000,1.000000,2.000");
        assert_eq!(lines[2], "100000,4,2.000000,1.000000,2.000");
        assert_eq!(lines.len(), 3);

        let manifest = std::fs::read_to_string(tmp.path().join("experiments_manifest.json"))
            .unwrap();
        assert!(manifest.contains("\"trials\": 2"));
        assert!(manifest.contains("\"cells_written\": 2"));
    }

    #[test]
    fn missing_dataset_skips_size() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch_dataset(tmp.path(), 100_000);
        // No dataset for 500000.
        let script = fake_program(tmp.path(), GOOD_OUTPUT);
        let results = tmp.path().join("results.csv");

        kmbench()
            .args([
                "--sizes",
                "100000,500000",
                "--threads",
                "1",
                "--trials",
                "1",
                "--program",
                script.to_str().unwrap(),
                "--data-dir",
                tmp.path().to_str().unwrap(),
                "--results",
                results.to_str().unwrap(),
                "-q",
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("dataset not found"));

        let content = std::fs::read_to_string(&results).unwrap();
        assert!(content.contains("100000,1,"));
        assert!(!content.contains("500000,"));
    }

    #[test]
    fn malformed_output_omits_the_cell() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch_dataset(tmp.path(), 100_000);
        let script = fake_program(tmp.path(), "echo \"Tiempo: 2.0 seg\"");
        let results = tmp.path().join("results.csv");

        kmbench()
            .args([
                "--sizes",
                "100000",
                "--threads",
                "1",
                "--trials",
                "2",
                "--program",
                script.to_str().unwrap(),
                "--data-dir",
                tmp.path().to_str().unwrap(),
                "--results",
                results.to_str().unwrap(),
                "-q",
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("incomplete cell"));

        let content = std::fs::read_to_string(&results).unwrap();
        assert_eq!(content.trim_end(), HEADER);
    }

    #[test]
    fn hung_program_is_timed_out() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch_dataset(tmp.path(), 100_000);
        let script = fake_program(tmp.path(), "sleep 10\necho \"Tiempo: 1.0 seg\"");
        let results = tmp.path().join("results.csv");

        kmbench()
            .args([
                "--sizes",
                "100000",
                "--threads",
                "1",
                "--trials",
                "1",
                "--timeout",
                "200ms",
                "--program",
                script.to_str().unwrap(),
                "--data-dir",
                tmp.path().to_str().unwrap(),
                "--results",
                results.to_str().unwrap(),
                "-q",
            ])
            .timeout(std::time::Duration::from_secs(30))
            .assert()
            .success()
            .stderr(predicate::str::contains("timed-out trial"));

        let content = std::fs::read_to_string(&results).unwrap();
        assert_eq!(content.trim_end(), HEADER);
    }

    #[test]
    fn unspawnable_program_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch_dataset(tmp.path(), 100_000);
        let results = tmp.path().join("results.csv");

        kmbench()
            .args([
                "--sizes",
                "100000",
                "--threads",
                "1",
                "--trials",
                "1",
                "--program",
                "/nonexistent/kmeans_compare",
                "--data-dir",
                tmp.path().to_str().unwrap(),
                "--results",
                results.to_str().unwrap(),
                "-q",
            ])
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn env_var_overrides_trials() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch_dataset(tmp.path(), 100_000);
        let script = fake_program(tmp.path(), GOOD_OUTPUT);
        let results = tmp.path().join("results.csv");

        kmbench()
            .env("KMBENCH_TRIALS", "3")
            .args([
                "--sizes",
                "100000",
                "--threads",
                "1",
                "--program",
                script.to_str().unwrap(),
                "--data-dir",
                tmp.path().to_str().unwrap(),
                "--results",
                results.to_str().unwrap(),
                "-q",
            ])
            .assert()
            .success();

        let manifest = std::fs::read_to_string(tmp.path().join("experiments_manifest.json"))
            .unwrap();
        assert!(manifest.contains("\"trials\": 3"));
    }

    fn write_results(path: &Path) {
        std::fs::write(
            path,
            format!(
                "{HEADER}\n\
                 100000,1,2.000000,2.100000,0.952\n\
                 100000,4,2.000000,0.800000,2.500\n\
                 800000,1,16.000000,16.500000,0.970\n\
                 800000,4,16.000000,5.200000,3.077\n"
            ),
        )
        .unwrap();
    }

    #[test]
    fn plot_speedup_renders_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let results = tmp.path().join("results.csv");
        write_results(&results);
        let chart = tmp.path().join("speedup.png");

        kmbench()
            .args([
                "--plot-speedup",
                "--results",
                results.to_str().unwrap(),
                "-o",
                chart.to_str().unwrap(),
                "-q",
            ])
            .assert()
            .success();

        assert!(std::fs::metadata(&chart).unwrap().len() > 0);
    }

    #[test]
    fn plot_times_renders_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let results = tmp.path().join("results.csv");
        write_results(&results);
        let chart = tmp.path().join("times.png");

        kmbench()
            .args([
                "--plot-times",
                "--size",
                "800000",
                "--results",
                results.to_str().unwrap(),
                "-o",
                chart.to_str().unwrap(),
                "-q",
            ])
            .assert()
            .success();

        assert!(std::fs::metadata(&chart).unwrap().len() > 0);
    }

    #[test]
    fn plot_times_with_absent_size_still_renders() {
        let tmp = tempfile::TempDir::new().unwrap();
        let results = tmp.path().join("results.csv");
        write_results(&results);
        let chart = tmp.path().join("times.png");

        kmbench()
            .args([
                "--plot-times",
                "--size",
                "300000",
                "--results",
                results.to_str().unwrap(),
                "-o",
                chart.to_str().unwrap(),
                "-q",
            ])
            .assert()
            .success();

        assert!(chart.exists());
    }
}

//! Scoped invocation of the external clustering program.
//!
//! Argument order is fixed by the program's CLI contract:
//! `<input_csv> <output_label> <cluster_count> both <thread_count>`.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use kmbench_core::constants::{MODE_BOTH, OUTPUT_LABEL};
use kmbench_core::BenchError;

/// Sleep between exit polls while a bounded trial is running.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// The external clustering executable with its fixed arguments.
#[derive(Debug, Clone)]
pub struct ClusteringProgram {
    path: PathBuf,
    clusters: u32,
    timeout: Option<Duration>,
}

impl ClusteringProgram {
    /// Describe the executable at `path` invoked with `clusters` clusters.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, clusters: u32) -> Self {
        Self {
            path: path.into(),
            clusters,
            timeout: None,
        }
    }

    /// Bound every trial: the child is killed once `timeout` elapses.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Path of the executable.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one trial against `input` and return the captured stdout.
    ///
    /// The child is always reaped before returning; on timeout it is killed
    /// first and the trial fails with [`BenchError::Timeout`]. A non-zero
    /// exit status is logged but not an error here: whether the trial counts
    /// is decided by parsing its output.
    pub fn run_trial(&self, input: &Path, threads: u32) -> Result<String, BenchError> {
        let mut child = Command::new(&self.path)
            .arg(input)
            .arg(OUTPUT_LABEL)
            .arg(self.clusters.to_string())
            .arg(MODE_BOTH)
            .arg(threads.to_string())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| BenchError::Invocation(format!("{}: {e}", self.path.display())))?;

        // Drain stdout on a helper thread so a chatty child can never fill
        // the pipe and stall while we poll for exit.
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| BenchError::Invocation("child stdout not captured".into()))?;
        let reader = std::thread::spawn(move || {
            let mut buf = String::new();
            let _ = stdout.read_to_string(&mut buf);
            buf
        });

        let status = match self.wait(&mut child) {
            Ok(status) => status,
            Err(e) => {
                // Orphaned grandchildren can hold the pipe open past the
                // kill; the reader thread is left to unblock on its own.
                drop(reader);
                return Err(e);
            }
        };
        let output = reader.join().unwrap_or_default();

        if !status.success() {
            tracing::warn!(
                program = %self.path.display(),
                %status,
                "program exited with non-zero status"
            );
        }
        Ok(output)
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus, BenchError> {
        let Some(timeout) = self.timeout else {
            return Ok(child.wait()?);
        };

        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(BenchError::Timeout(format!(
                    "{:.1}s",
                    timeout.as_secs_f64()
                )));
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

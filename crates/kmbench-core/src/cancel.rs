//! Cooperative cancellation for the experiment sweep.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::BenchError;

/// Cancellation token checked between trials.
///
/// Cloned into the Ctrl+C handler; the sweep polls it at every checkpoint so
/// a cancelled run stops before spawning the next child process.
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Checkpoint: return `Err(BenchError::Cancelled)` once cancelled.
    pub fn check_cancelled(&self) -> Result<(), BenchError> {
        if self.is_cancelled() {
            Err(BenchError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

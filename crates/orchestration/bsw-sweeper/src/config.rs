//! Sweep configuration.

use std::time::Duration;

/// Default number of concurrent read workers.
pub const DEFAULT_WORKERS: usize = 32;

/// Default maximum bytes per ranged GET (4 GiB). Caps how much a single
/// GET can pull into flight at once.
pub const DEFAULT_CHUNK_SIZE: u64 = 4 * 1024 * 1024 * 1024;

/// Default pause between queue polls for an idle worker.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Tuning knobs for a sweep run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Number of concurrent read workers
    pub workers: usize,

    /// Maximum bytes per ranged GET; larger objects are split
    pub chunk_size: u64,

    /// Pause between queue polls for an idle worker
    pub poll_interval: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl SweepConfig {
    /// Create a configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of concurrent read workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the maximum bytes per ranged GET.
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the idle-worker poll interval.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

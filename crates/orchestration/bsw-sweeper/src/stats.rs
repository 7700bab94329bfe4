//! Statistics for sweep runs.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Statistics collected during a sweep.
///
/// Counters are atomic so the enumerator and every worker can record
/// without coordination; listing-error messages go behind a mutex since
/// only the single producer writes them.
#[derive(Debug, Default)]
pub struct SweepStats {
    /// When the sweep started
    started_at: Option<DateTime<Utc>>,

    /// Objects seen in the listing
    objects_listed: AtomicU64,

    /// Total size of listed objects
    bytes_listed: AtomicU64,

    /// Read tasks pushed onto the queue
    tasks_enqueued: AtomicU64,

    /// Read tasks that completed successfully
    tasks_succeeded: AtomicU64,

    /// Read tasks whose retrieval failed
    tasks_failed: AtomicU64,

    /// Bytes actually transferred by successful reads
    bytes_read: AtomicU64,

    /// Listing pages that failed
    listing_errors: AtomicU64,

    /// Error messages, in the order they occurred
    errors: Mutex<Vec<String>>,
}

impl SweepStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Record an object seen in the listing.
    pub fn record_listed(&self, size: u64) {
        self.objects_listed.fetch_add(1, Ordering::Relaxed);
        self.bytes_listed.fetch_add(size, Ordering::Relaxed);
    }

    /// Record a task pushed onto the queue.
    pub fn record_enqueued(&self) {
        self.tasks_enqueued.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful read of `bytes` bytes.
    pub fn record_task_success(&self, bytes: u64) {
        self.tasks_succeeded.fetch_add(1, Ordering::Relaxed);
        self.bytes_read.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Record a failed read.
    pub fn record_task_failure(&self) {
        self.tasks_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed listing page.
    pub fn record_listing_error(&self, error: impl ToString) {
        self.listing_errors.fetch_add(1, Ordering::Relaxed);
        self.errors.lock().push(error.to_string());
    }

    /// Objects seen in the listing so far.
    pub fn objects_listed(&self) -> u64 {
        self.objects_listed.load(Ordering::Relaxed)
    }

    /// Total size of listed objects so far.
    pub fn bytes_listed(&self) -> u64 {
        self.bytes_listed.load(Ordering::Relaxed)
    }

    /// Tasks pushed onto the queue so far.
    pub fn tasks_enqueued(&self) -> u64 {
        self.tasks_enqueued.load(Ordering::Relaxed)
    }

    /// Tasks completed successfully so far.
    pub fn tasks_succeeded(&self) -> u64 {
        self.tasks_succeeded.load(Ordering::Relaxed)
    }

    /// Tasks whose retrieval failed so far.
    pub fn tasks_failed(&self) -> u64 {
        self.tasks_failed.load(Ordering::Relaxed)
    }

    /// Bytes transferred by successful reads so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read.load(Ordering::Relaxed)
    }

    /// Listing pages that failed so far.
    pub fn listing_errors(&self) -> u64 {
        self.listing_errors.load(Ordering::Relaxed)
    }

    /// Create a serializable snapshot of the current statistics.
    ///
    /// The snapshot's `completed_at` is left unset; the caller stamps it
    /// once the pool has joined.
    pub fn snapshot(&self) -> SweepSummary {
        SweepSummary {
            started_at: self.started_at,
            completed_at: None,
            objects_listed: self.objects_listed(),
            bytes_listed: self.bytes_listed(),
            tasks_enqueued: self.tasks_enqueued(),
            tasks_succeeded: self.tasks_succeeded(),
            tasks_failed: self.tasks_failed(),
            bytes_read: self.bytes_read(),
            listing_errors: self.listing_errors(),
            errors: self.errors.lock().clone(),
        }
    }
}

/// A serializable snapshot of sweep statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub objects_listed: u64,
    pub bytes_listed: u64,
    pub tasks_enqueued: u64,
    pub tasks_succeeded: u64,
    pub tasks_failed: u64,
    pub bytes_read: u64,
    pub listing_errors: u64,
    pub errors: Vec<String>,
}

impl SweepSummary {
    /// Duration of the sweep, if both endpoints are known.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// True if any listing page or retrieval failed.
    pub fn has_errors(&self) -> bool {
        self.listing_errors > 0 || self.tasks_failed > 0
    }

    /// Read throughput in MB per second over the whole sweep.
    pub fn read_throughput_mbps(&self) -> Option<f64> {
        self.duration().map(|d| {
            let secs = d.num_milliseconds() as f64 / 1000.0;
            if secs > 0.0 {
                (self.bytes_read as f64 / 1_000_000.0) / secs
            } else {
                0.0
            }
        })
    }

    /// Throughput in completed tasks per second over the whole sweep.
    pub fn tasks_per_second(&self) -> Option<f64> {
        self.duration().map(|d| {
            let secs = d.num_milliseconds() as f64 / 1000.0;
            if secs > 0.0 {
                self.tasks_succeeded as f64 / secs
            } else {
                0.0
            }
        })
    }
}

//! Fixed-size worker pool draining the task queue.

use std::sync::Arc;
use std::time::Duration;

use bsw_traits::ObjectRetriever;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::queue::TaskQueue;
use crate::stats::SweepStats;

/// A fixed set of workers bound to one shared [`TaskQueue`].
///
/// Workers race to pop tasks, so retrieval order across tasks is
/// nondeterministic; nothing in the sweep depends on it.
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `count` workers against a shared queue and retriever.
    ///
    /// Every worker holds the same retriever reference; tasks are
    /// independent, so no coordination beyond the queue is needed.
    pub fn start<R: ObjectRetriever + 'static>(
        count: usize,
        queue: Arc<TaskQueue>,
        retriever: Arc<R>,
        stats: Arc<SweepStats>,
        poll_interval: Duration,
    ) -> Self {
        assert!(count > 0, "worker count must be positive");

        let handles = (0..count)
            .map(|id| {
                let queue = Arc::clone(&queue);
                let retriever = Arc::clone(&retriever);
                let stats = Arc::clone(&stats);
                tokio::spawn(worker_loop(id as u32, queue, retriever, stats, poll_interval))
            })
            .collect();

        Self { handles }
    }

    /// Block until every worker has drained the queue and exited.
    ///
    /// Call this only after the producer has closed the queue; joining
    /// earlier can block indefinitely once the queue momentarily drains.
    pub async fn join_all(self) {
        let results = futures::future::join_all(self.handles).await;
        for (id, result) in results.into_iter().enumerate() {
            if let Err(e) = result {
                error!(worker = id, error = %e, "Worker task panicked");
            }
        }
    }
}

/// Worker loop: drain the queue; on empty, exit if the queue is closed,
/// otherwise pause briefly and poll again.
///
/// An idle worker re-checks every `poll_interval` instead of waiting on a
/// wakeup primitive; the shared queue lock guarantees it cannot observe
/// "empty and closed" while undelivered tasks remain.
async fn worker_loop<R: ObjectRetriever>(
    id: u32,
    queue: Arc<TaskQueue>,
    retriever: Arc<R>,
    stats: Arc<SweepStats>,
    poll_interval: Duration,
) {
    debug!(worker = id, "Worker started");

    loop {
        while let Some(task) = queue.pop() {
            match retriever.retrieve(&task).await {
                Ok(bytes) => {
                    stats.record_task_success(bytes);
                    info!(worker = id, key = %task.key, range = ?task.range, bytes, "Read");
                }
                Err(e) => {
                    // A failed read is terminal for that task; the worker
                    // moves on and the task is never requeued.
                    stats.record_task_failure();
                    warn!(worker = id, key = %task.key, range = ?task.range, error = %e, "GetObject failed");
                }
            }
        }

        if queue.is_closed() {
            break;
        }

        tokio::time::sleep(poll_interval).await;
    }

    debug!(worker = id, "Worker finished");
}

//! Sweep orchestration: enumerate the bucket, fan tasks out, join the pool.

use std::sync::Arc;

use bsw_traits::{ObjectLister, ObjectRetriever};
use bsw_types::{ReadTask, partition_ranges};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::SweepConfig;
use crate::pool::WorkerPool;
use crate::queue::TaskQueue;
use crate::stats::{SweepStats, SweepSummary};

/// Coordinates one full read sweep of a bucket.
///
/// Generic over the listing and retrieval collaborators so the same
/// orchestration runs against real S3 in production and in-memory mocks
/// in tests.
pub struct Sweeper<L: ObjectLister, R: ObjectRetriever> {
    lister: Arc<L>,
    retriever: Arc<R>,
    config: SweepConfig,
}

impl<L: ObjectLister + 'static, R: ObjectRetriever + 'static> Sweeper<L, R> {
    /// Create a new sweeper.
    pub fn new(lister: L, retriever: R, config: SweepConfig) -> Self {
        Self {
            lister: Arc::new(lister),
            retriever: Arc::new(retriever),
            config,
        }
    }

    /// Run the concurrent sweep to completion.
    ///
    /// The worker pool starts first, then enumeration runs on the calling
    /// task while workers drain concurrently. Individual listing or
    /// retrieval failures never abort the sweep; they are logged and
    /// counted in the returned summary.
    pub async fn sweep(&self) -> SweepSummary {
        info!(
            workers = self.config.workers,
            chunk_size = self.config.chunk_size,
            "Starting sweep"
        );

        let queue = Arc::new(TaskQueue::new());
        let stats = Arc::new(SweepStats::new());

        let pool = WorkerPool::start(
            self.config.workers,
            Arc::clone(&queue),
            Arc::clone(&self.retriever),
            Arc::clone(&stats),
            self.config.poll_interval,
        );

        self.enumerate(&queue, &stats).await;

        // No further pushes can happen past this point; workers exit once
        // they see the queue empty and closed.
        queue.close();
        pool.join_all().await;

        let mut summary = stats.snapshot();
        summary.completed_at = Some(Utc::now());

        info!(
            objects = summary.objects_listed,
            tasks = summary.tasks_enqueued,
            succeeded = summary.tasks_succeeded,
            failed = summary.tasks_failed,
            bytes = summary.bytes_read,
            "Sweep completed"
        );

        summary
    }

    /// Page through the listing, partitioning each object into read tasks.
    async fn enumerate(&self, queue: &TaskQueue, stats: &SweepStats) {
        let mut token: Option<String> = None;

        loop {
            let page = match self.lister.list_page(token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    // A failed page carries no token to advance with, so
                    // enumeration ends here; tasks already enqueued still
                    // drain normally.
                    warn!(error = %e, "Bucket listing page failed");
                    stats.record_listing_error(&e);
                    break;
                }
            };

            for obj in &page.objects {
                stats.record_listed(obj.size);
                info!(key = %obj.key, size = obj.size, "Listed object");

                // A zero-length object yields no ranges and no tasks.
                for range in partition_ranges(obj.size, self.config.chunk_size) {
                    queue.push(ReadTask::ranged(obj.key.clone(), range));
                    stats.record_enqueued();
                }
            }

            debug!(pending = queue.len(), "Listing page enqueued");

            if page.truncated && page.next_token.is_some() {
                token = page.next_token;
            } else {
                break;
            }
        }
    }

    /// Single-pass variant: one whole-object GET per listed key, issued
    /// inline with no queue and no pool.
    pub async fn sweep_sequential(&self) -> SweepSummary {
        info!("Starting sequential sweep");

        let stats = SweepStats::new();
        let mut token: Option<String> = None;

        loop {
            let page = match self.lister.list_page(token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(error = %e, "Bucket listing page failed");
                    stats.record_listing_error(&e);
                    break;
                }
            };

            for obj in &page.objects {
                stats.record_listed(obj.size);
                info!(key = %obj.key, size = obj.size, "Listed object");

                let task = ReadTask::whole(obj.key.clone());
                stats.record_enqueued();
                match self.retriever.retrieve(&task).await {
                    Ok(bytes) => {
                        stats.record_task_success(bytes);
                        info!(key = %task.key, bytes, "Read");
                    }
                    Err(e) => {
                        stats.record_task_failure();
                        warn!(key = %task.key, error = %e, "GetObject failed");
                    }
                }
            }

            if page.truncated && page.next_token.is_some() {
                token = page.next_token;
            } else {
                break;
            }
        }

        let mut summary = stats.snapshot();
        summary.completed_at = Some(Utc::now());
        summary
    }
}

//! Bulk bucket read sweeper.
//!
//! Enumerates every object in a bucket, splits large objects into
//! bounded-size byte ranges, and fans the resulting read tasks out to a
//! fixed pool of concurrent workers. Retrieved bytes are discarded; the
//! sweep exists to measure and exercise the object store, not to keep the
//! data.
//!
//! The moving parts:
//!
//! - [`TaskQueue`] - shared FIFO of pending reads plus a one-way
//!   "no more work" flag
//! - [`WorkerPool`] - fixed set of workers draining the queue
//! - [`Sweeper`] - pages the bucket listing, enqueues tasks, closes the
//!   queue, and joins the pool

pub mod config;
pub mod pool;
pub mod queue;
pub mod s3;
pub mod stats;
pub mod sweeper;

pub use config::SweepConfig;
pub use pool::WorkerPool;
pub use queue::TaskQueue;
pub use s3::{S3Config, S3Lister, S3Retriever, create_s3_client};
pub use stats::{SweepStats, SweepSummary};
pub use sweeper::Sweeper;

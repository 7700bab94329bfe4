//! Core types for bucketsweep: read tasks and byte-range partitioning.

mod range;
mod read_task;

pub use range::{ByteRange, partition_ranges};
pub use read_task::ReadTask;

//! Thread-safe work queue shared by the enumerator and the worker pool.

use std::collections::VecDeque;

use bsw_types::ReadTask;
use parking_lot::Mutex;

/// FIFO of pending read tasks plus a one-way "no more work" flag.
///
/// The deque and the flag live behind a single mutex. That shared lock is
/// what makes the termination protocol race-free: the producer closes the
/// queue only after its final push, so a worker whose `pop` reports empty
/// after `is_closed` returned true can never miss a task.
///
/// The queue is deliberately unbounded; the single producer is
/// responsible for overall memory pressure.
#[derive(Debug, Default)]
pub struct TaskQueue {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    tasks: VecDeque<ReadTask>,
    closed: bool,
}

impl TaskQueue {
    /// Create an empty, open queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the tail. Never blocks.
    pub fn push(&self, task: ReadTask) {
        self.inner.lock().tasks.push_back(task);
    }

    /// Remove and return the head task, or `None` if the queue is
    /// momentarily empty. Never blocks; a popped task is never handed to
    /// another caller.
    pub fn pop(&self) -> Option<ReadTask> {
        self.inner.lock().tasks.pop_front()
    }

    /// Mark that no further tasks will ever be pushed.
    ///
    /// Idempotent; the flag is monotonic and never resets. Called by the
    /// producer exactly once, after its final push.
    pub fn close(&self) {
        self.inner.lock().closed = true;
    }

    /// Non-blocking read of the "no more work" flag.
    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    /// Number of tasks currently pending, for monitoring only.
    pub fn len(&self) -> usize {
        self.inner.lock().tasks.len()
    }

    /// True if no tasks are currently pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Read task type: one unit of retrieval work.

use serde::{Deserialize, Serialize};

use crate::ByteRange;

/// One unit of retrieval work: an object key and an optional byte range.
///
/// A task with `range: None` reads the whole object in a single GET.
/// Tasks are immutable once created; each one is consumed by exactly one
/// worker and never requeued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadTask {
    /// Object key within the bucket
    pub key: String,

    /// Byte range to read, or `None` for the whole object
    pub range: Option<ByteRange>,
}

impl ReadTask {
    /// Create a task that reads the whole object.
    pub fn whole(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            range: None,
        }
    }

    /// Create a task that reads one byte range of an object.
    pub fn ranged(key: impl Into<String>, range: ByteRange) -> Self {
        Self {
            key: key.into(),
            range: Some(range),
        }
    }
}

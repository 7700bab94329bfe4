//! Object retrieval trait.

use async_trait::async_trait;
use bsw_error::GetError;
use bsw_types::ReadTask;

/// Trait for ranged object-retrieval backends.
///
/// A retriever executes one [`ReadTask`]: it issues the GET (with a
/// `Range` header when the task carries one), transfers the body to its
/// sink, and reports how many bytes arrived. What the sink does with the
/// bytes is the implementation's business; the production retriever
/// discards them and keeps only the count.
///
/// Implementations must be safe for concurrent use: every worker in the
/// pool holds a shared reference and calls [`retrieve`](ObjectRetriever::retrieve)
/// from its own task.
#[async_trait]
pub trait ObjectRetriever: Send + Sync {
    /// Execute one read task, returning the number of bytes transferred.
    async fn retrieve(&self, task: &ReadTask) -> Result<u64, GetError>;
}

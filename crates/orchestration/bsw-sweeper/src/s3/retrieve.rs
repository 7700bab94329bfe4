//! Ranged S3 object retrieval with a discarding sink.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::ProvideErrorMetadata;
use bsw_error::GetError;
use bsw_traits::ObjectRetriever;
use bsw_types::ReadTask;

/// [`ObjectRetriever`] backed by S3 `GetObject`.
///
/// The response body is drained chunk by chunk and thrown away; only the
/// byte count survives. One client handle is shared by every worker,
/// since `GetObject` calls are independent and need no extra locking.
#[derive(Debug, Clone)]
pub struct S3Retriever {
    client: Client,
    bucket: String,
}

impl S3Retriever {
    /// Create a retriever for one bucket.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectRetriever for S3Retriever {
    async fn retrieve(&self, task: &ReadTask) -> Result<u64, GetError> {
        let mut req = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&task.key);

        if let Some(range) = &task.range {
            req = req.range(range.to_header_value());
        }

        let resp = req.send().await.map_err(|e| match e.code() {
            Some(code) => GetError::Service {
                code: code.to_string(),
                message: e.message().unwrap_or("GetObject failed").to_string(),
            },
            None => GetError::Connection(e.to_string()),
        })?;

        // Drain the body without keeping it.
        let mut body = resp.body;
        let mut bytes = 0u64;
        while let Some(chunk) = body
            .try_next()
            .await
            .map_err(|e| GetError::Body(e.to_string()))?
        {
            bytes += chunk.len() as u64;
        }

        Ok(bytes)
    }
}

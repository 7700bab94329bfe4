//! Paged S3 bucket listing.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::ProvideErrorMetadata;
use bsw_error::ListError;
use bsw_traits::{ListPage, ObjectLister, ObjectSummary};

/// [`ObjectLister`] backed by S3 `ListObjectsV2`.
#[derive(Debug, Clone)]
pub struct S3Lister {
    client: Client,
    bucket: String,
    prefix: Option<String>,
}

impl S3Lister {
    /// Create a lister for one bucket, optionally restricted to a prefix.
    pub fn new(client: Client, bucket: impl Into<String>, prefix: Option<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix,
        }
    }
}

#[async_trait]
impl ObjectLister for S3Lister {
    async fn list_page(&self, continuation_token: Option<&str>) -> Result<ListPage, ListError> {
        let mut req = self.client.list_objects_v2().bucket(&self.bucket);

        if let Some(prefix) = &self.prefix {
            req = req.prefix(prefix);
        }

        if let Some(token) = continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req.send().await.map_err(|e| match e.code() {
            Some(code) => ListError::Service {
                code: code.to_string(),
                message: e.message().unwrap_or("ListObjectsV2 failed").to_string(),
            },
            None => ListError::Connection(e.to_string()),
        })?;

        let objects = resp
            .contents
            .unwrap_or_default()
            .into_iter()
            .filter_map(|obj| {
                let key = obj.key.unwrap_or_default();

                // Skip empty keys
                if key.is_empty() {
                    return None;
                }

                Some(ObjectSummary {
                    key,
                    size: obj.size.unwrap_or(0).max(0) as u64,
                })
            })
            .collect();

        Ok(ListPage {
            objects,
            next_token: resp.next_continuation_token,
            truncated: resp.is_truncated == Some(true),
        })
    }
}

//! Bucket listing trait and page types.

use async_trait::async_trait;
use bsw_error::ListError;
use serde::{Deserialize, Serialize};

/// A single object returned by a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    /// The object key (full path within the bucket)
    pub key: String,

    /// Size of the object in bytes
    pub size: u64,
}

/// One page of a bucket listing.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Objects on this page, in listing order
    pub objects: Vec<ObjectSummary>,

    /// Continuation token for the next page, if the service returned one
    pub next_token: Option<String>,

    /// True if more pages follow this one
    pub truncated: bool,
}

/// Trait for paged bucket-listing backends.
///
/// Implementations include the S3 `ListObjectsV2` lister (production) and
/// in-memory page sequences (tests).
#[async_trait]
pub trait ObjectLister: Send + Sync {
    /// Fetch one page of the bucket listing.
    ///
    /// Pass `None` for the first page and the previous page's
    /// `next_token` afterwards. The final page has `truncated == false`.
    async fn list_page(&self, continuation_token: Option<&str>) -> Result<ListPage, ListError>;
}

//! Collaborator traits for bucketsweep.
//!
//! The sweep core only needs two things from the object store: a paged
//! listing of the bucket and a ranged retrieval per task. Both are
//! expressed as traits so the orchestration can be driven by the real S3
//! implementations in production and by in-memory mocks in tests.

mod listing;
mod retrieve;

pub use listing::{ListPage, ObjectLister, ObjectSummary};
pub use retrieve::ObjectRetriever;

//! Error types for bucketsweep.
//!
//! This crate provides:
//! - [`SweepError`] - Top-level error enum for all sweep errors
//! - Domain-specific errors ([`ListError`], [`GetError`])
//!
//! None of these are fatal to a sweep: a failed listing page ends
//! enumeration early, and a failed retrieval is logged and skipped. The
//! process still drains the queue and reports a full error count.

use thiserror::Error;

/// Top-level error type for bucketsweep.
#[derive(Error, Debug)]
pub enum SweepError {
    /// Bucket listing errors (paged ListObjectsV2)
    #[error("Listing error: {0}")]
    Listing(#[from] ListError),

    /// Object retrieval errors (ranged GET)
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] GetError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors from a single bucket-listing page request.
#[derive(Error, Debug)]
pub enum ListError {
    /// The service answered with an error
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// The request never produced a service response
    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Errors from a single object retrieval.
#[derive(Error, Debug)]
pub enum GetError {
    /// The service answered with an error
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// The request never produced a service response
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The response body stream failed mid-transfer
    #[error("Body read failed: {0}")]
    Body(String),
}

/// Result type alias using SweepError.
pub type Result<T> = std::result::Result<T, SweepError>;

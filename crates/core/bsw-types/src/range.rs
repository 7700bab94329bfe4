//! Byte ranges and object partitioning.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` within an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    /// First byte of the range (inclusive)
    pub start: u64,

    /// One past the last byte of the range (exclusive)
    pub end: u64,
}

impl ByteRange {
    /// Create a new range. `start` must be strictly below `end`.
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start < end, "byte range must be non-empty");
        Self { start, end }
    }

    /// Number of bytes covered by the range.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// True if the range covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Render as an HTTP `Range` header value.
    ///
    /// HTTP byte ranges are inclusive on both ends, so `[0, 10)` renders
    /// as `bytes=0-9`.
    pub fn to_header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end - 1)
    }
}

impl std::fmt::Display for ByteRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}

/// Split an object of `size` bytes into contiguous ranges of at most
/// `chunk` bytes each.
///
/// The returned ranges are strictly increasing, non-overlapping, and
/// together cover exactly `[0, size)`. A zero-length object yields no
/// ranges at all, since a `Range` header cannot describe an empty span.
///
/// `chunk` must be positive; passing zero is a programming error.
pub fn partition_ranges(size: u64, chunk: u64) -> Vec<ByteRange> {
    assert!(chunk > 0, "chunk size must be positive");

    let mut ranges = Vec::with_capacity(size.div_ceil(chunk) as usize);
    let mut offset = 0u64;
    while offset < size {
        let end = offset.saturating_add(chunk).min(size);
        ranges.push(ByteRange { start: offset, end });
        offset = end;
    }
    ranges
}

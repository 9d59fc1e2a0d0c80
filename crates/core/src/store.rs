//! Types shared by every repository trait.

use thiserror::Error;

/// Errors reported by a document store.
///
/// A missing document is never an error: lookups return `Ok(None)` and
/// deletes report how many documents they removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A unique index rejected the write.
    #[error("unique index violated: {0}")]
    Conflict(String),

    /// The store could not serve the request.
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// One slice of a collection together with the number of documents matching
/// the same filter, as counted by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPage<T> {
    /// Documents in the requested slice.
    pub items: Vec<T>,
    /// Total number of matching documents.
    pub total_elements: u64,
}

//! Catalog store error types.

use thiserror::Error;

/// Errors that can occur in a catalog store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failure in the underlying persistence engine.
    #[error("catalog backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The store does not support ordering by the requested key.
    #[error("unsupported sort key: {key}")]
    UnsupportedSortKey { key: String },
}

impl StoreError {
    /// Wraps an arbitrary engine error as a backend failure.
    pub fn backend<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(source))
    }
}

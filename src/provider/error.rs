//! Repository provider error types.

use thiserror::Error;

/// Errors that can occur while talking to a repository provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// Failure in a non-GitHub provider implementation.
    #[error("provider backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
    /// Wraps an arbitrary transport error as a backend failure.
    pub fn backend<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(source))
    }
}

//! Catalog store contract and the in-memory reference implementation.
//!
//! The reconciliation service never talks to a persistence engine directly;
//! it goes through the [`CatalogStore`] capability trait so any engine (or a
//! test double) can be substituted at construction time.

mod error;
mod memory;
mod record;

pub use error::StoreError;
pub use memory::InMemoryCatalog;
pub use record::ModuleRecord;

use std::num::NonZeroUsize;

/// Sort key for module listings: registration time.
pub const CREATED_AT: &str = "created_at";

/// Direction for ordered retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Oldest first.
    Ascending,
    /// Newest first.
    Descending,
}

/// Read access to persisted module records.
///
/// Implementations own their concurrency safety and their error mapping into
/// [`StoreError`]. "Not found" is never an error: [`CatalogStore::find_by_name`]
/// distinguishes absence (`Ok(None)`) from failure (`Err`).
pub trait CatalogStore {
    /// Returns module records ordered by `sort_key` in `direction`, capped at
    /// `limit` when present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the engine fails or the sort key is not
    /// supported.
    fn find_all(
        &self,
        limit: Option<NonZeroUsize>,
        sort_key: &str,
        direction: SortDirection,
    ) -> impl std::future::Future<Output = Result<Vec<ModuleRecord>, StoreError>> + Send;

    /// Looks up a module record by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only on engine failure; a missing record is
    /// `Ok(None)`.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<ModuleRecord>, StoreError>> + Send;
}

impl<S: CatalogStore + Sync> CatalogStore for &S {
    async fn find_all(
        &self,
        limit: Option<NonZeroUsize>,
        sort_key: &str,
        direction: SortDirection,
    ) -> Result<Vec<ModuleRecord>, StoreError> {
        (**self).find_all(limit, sort_key, direction).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ModuleRecord>, StoreError> {
        (**self).find_by_name(name).await
    }
}

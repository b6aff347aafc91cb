//! In-memory catalog store.

use std::num::NonZeroUsize;
use std::sync::RwLock;

use super::{CatalogStore, ModuleRecord, SortDirection, StoreError, CREATED_AT};

/// A catalog store backed by process memory.
///
/// Honors the same retrieval contract as a persistent engine: ordering by
/// registration time in either direction, an optional result cap, and exact
/// name lookup. Useful for tests and for embedding without a database.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: RwLock<Vec<ModuleRecord>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with the given records.
    #[must_use]
    pub fn with_records(records: Vec<ModuleRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Registers a module record.
    ///
    /// A record with the same name replaces the existing one.
    pub fn insert(&self, record: ModuleRecord) {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.retain(|existing| existing.name != record.name);
        records.push(record);
    }

    /// Number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Returns true if no records are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CatalogStore for InMemoryCatalog {
    async fn find_all(
        &self,
        limit: Option<NonZeroUsize>,
        sort_key: &str,
        direction: SortDirection,
    ) -> Result<Vec<ModuleRecord>, StoreError> {
        if sort_key != CREATED_AT {
            return Err(StoreError::UnsupportedSortKey {
                key: sort_key.to_string(),
            });
        }

        let mut records = self
            .records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        // Records without a timestamp sort as oldest.
        records.sort_by(|a, b| match direction {
            SortDirection::Ascending => a.created_at.cmp(&b.created_at),
            SortDirection::Descending => b.created_at.cmp(&a.created_at),
        });

        if let Some(limit) = limit {
            records.truncate(limit.get());
        }

        Ok(records)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ModuleRecord>, StoreError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.iter().find(|record| record.name == name).cloned())
    }
}

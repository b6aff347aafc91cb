//! Catalog reconciliation service.
//!
//! The decision core of the system: which of the authenticated account's
//! repositories count as modules, how remote results are filtered before any
//! catalog lookup, and how a repository is verified to contain a module
//! definition. Everything else is a collaborator reached through the
//! [`CatalogStore`] and [`RepositoryProvider`] traits.

use std::num::NonZeroUsize;

use futures::StreamExt;
use thiserror::Error;
use tracing::{debug, info, info_span, Instrument};

use crate::provider::{ProviderError, RemoteRepository, RepoListOptions, RepositoryProvider};
use crate::store::{CatalogStore, ModuleRecord, SortDirection, StoreError, CREATED_AT};

/// Errors surfaced by the reconciliation service.
///
/// All originate in a collaborator and pass through unchanged; the service
/// itself retries nothing and recovers nothing.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Catalog store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Repository provider failure.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Reconciles the module catalog with the account's remote repositories.
pub struct ModuleService<S, P> {
    store: S,
    provider: P,
}

impl<S, P> ModuleService<S, P>
where
    S: CatalogStore,
    P: RepositoryProvider,
{
    /// Builds a service over the given collaborators.
    pub fn new(store: S, provider: P) -> Self {
        Self { store, provider }
    }

    /// Lists catalog modules, newest first.
    ///
    /// Delegates straight to the store with the listing order fixed to
    /// registration time descending; the store's result is returned verbatim
    /// with no further filtering or deduplication. `limit` caps the listing
    /// when present.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the store fails.
    pub async fn all_modules(
        &self,
        limit: Option<NonZeroUsize>,
    ) -> Result<Vec<ModuleRecord>, ServiceError> {
        debug!(?limit, "Listing catalog modules");
        let modules = self
            .store
            .find_all(limit, CREATED_AT, SortDirection::Descending)
            .await?;
        Ok(modules)
    }

    /// Lists the account's repositories that are registered as modules.
    ///
    /// Walks the provider's repository sequence in emission order. Forks and
    /// repositories the account cannot push to are skipped without touching
    /// the catalog; each remaining repository is looked up by exact name and
    /// included only when a record exists. An empty result is a normal
    /// outcome. Absent records are skipped silently; every other collaborator
    /// failure propagates.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the provider listing or a catalog lookup
    /// fails.
    pub async fn current_account_modules(&self) -> Result<Vec<ModuleRecord>, ServiceError> {
        let span = info_span!("reconcile_account_modules");

        async {
            let mut repositories = self.provider.repos(RepoListOptions::default());
            let mut modules = Vec::new();

            while let Some(repository) = repositories.next().await {
                let repository = repository?;

                if !repository.is_eligible() {
                    debug!(
                        repo = %repository.name,
                        fork = repository.fork,
                        push = repository.permissions.push,
                        "Skipping ineligible repository"
                    );
                    continue;
                }

                match self.store.find_by_name(&repository.name).await? {
                    Some(module) => {
                        debug!(repo = %repository.name, "Repository registered as module");
                        modules.push(module);
                    }
                    None => {
                        debug!(repo = %repository.name, "Repository not in catalog, skipping");
                    }
                }
            }

            info!(count = modules.len(), "Reconciliation complete");
            Ok(modules)
        }
        .instrument(span)
        .await
    }

    /// Queries the provider for evidence that a repository defines a module.
    ///
    /// Issues exactly one code-search request for a `Module.php` file
    /// containing `"class Module"` within the repository, and hands the raw
    /// response back uninterpreted. Whether the response means "is a module"
    /// is the caller's judgment.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the transport fails.
    pub async fn is_module(&self, repository: &RemoteRepository) -> Result<P::Raw, ServiceError> {
        let path = module_search_path(&repository.owner_login, &repository.name);
        debug!(path = %path, "Verifying module shape");
        Ok(self.provider.request(&path).await?)
    }
}

/// Builds the code-search path probing for a module definition.
///
/// Format: `search/code?q=repo:{owner}/{name} filename:Module.php "class Module"`,
/// with owner and name substituted literally.
fn module_search_path(owner: &str, name: &str) -> String {
    format!("search/code?q=repo:{owner}/{name} filename:Module.php \"class Module\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_search_path() {
        assert_eq!(
            module_search_path("suzie", "foo"),
            "search/code?q=repo:suzie/foo filename:Module.php \"class Module\""
        );
    }
}

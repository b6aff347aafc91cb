//! Remote repository provider contract and the GitHub-backed implementation.
//!
//! The reconciliation service consumes the hosting API through the
//! [`RepositoryProvider`] capability trait: a lazily produced, single-pass
//! sequence of the authenticated account's repositories, plus the raw
//! transport used by the module verification query. Paging over the wire is
//! an implementation concern and never visible to the core.

mod error;
mod github;
mod repository;

pub use error::ProviderError;
pub use github::GitHubProvider;
pub use repository::{RemoteRepository, RepositoryPermissions};

use futures::stream::BoxStream;

/// Results per page when listing the account's repositories.
const REPOS_PER_PAGE: u8 = 100;

/// Which repositories to list for the authenticated account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepositoryType {
    /// Everything the account can see: owned, collaborator, organization.
    #[default]
    All,
    /// Repositories the account owns.
    Owner,
    /// Repositories the account collaborates on.
    Member,
}

impl RepositoryType {
    /// The wire value of the `type` listing parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }
}

/// Options for listing the authenticated account's repositories.
///
/// The reconciliation service always uses the default: every visible
/// repository, 100 per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoListOptions {
    /// Repository type filter.
    pub kind: RepositoryType,

    /// Page size for the provider's internal paging.
    pub per_page: u8,
}

impl Default for RepoListOptions {
    fn default() -> Self {
        Self {
            kind: RepositoryType::All,
            per_page: REPOS_PER_PAGE,
        }
    }
}

/// Access to the hosting account's repositories and its raw search transport.
pub trait RepositoryProvider {
    /// The transport's response type, returned uninterpreted by
    /// [`request`][`RepositoryProvider::request`].
    type Raw;

    /// Streams the authenticated account's repositories.
    ///
    /// The sequence is finite, forward-only, and emitted in provider order;
    /// transport failures surface as stream items.
    fn repos(
        &self,
        options: RepoListOptions,
    ) -> BoxStream<'_, Result<RemoteRepository, ProviderError>>;

    /// Issues a raw request against the provider's transport.
    ///
    /// The path is passed through verbatim and the response is returned
    /// without interpretation.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the transport fails.
    fn request(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Self::Raw, ProviderError>> + Send;
}

impl<P: RepositoryProvider + Sync> RepositoryProvider for &P {
    type Raw = P::Raw;

    fn repos(
        &self,
        options: RepoListOptions,
    ) -> BoxStream<'_, Result<RemoteRepository, ProviderError>> {
        (**self).repos(options)
    }

    async fn request(&self, path: &str) -> Result<Self::Raw, ProviderError> {
        (**self).request(path).await
    }
}

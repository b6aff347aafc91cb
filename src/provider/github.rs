//! GitHub-backed repository provider.
//!
//! Adapts octocrab to the [`RepositoryProvider`] contract: the
//! authenticated-user repository listing is paged over the wire but exposed
//! as one lazy stream, and API payloads are mapped into [`RemoteRepository`]
//! values at this boundary.

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use octocrab::models::Repository;
use octocrab::Octocrab;
use http::Uri;
use tracing::debug;

use super::{
    ProviderError, RemoteRepository, RepoListOptions, RepositoryPermissions, RepositoryProvider,
};

/// Repository provider backed by the GitHub REST API.
#[derive(Clone)]
pub struct GitHubProvider {
    client: Octocrab,
}

/// Position in the paged repository listing.
enum PageCursor {
    First,
    Next(Option<Uri>),
}

impl GitHubProvider {
    /// Wraps an already configured GitHub client.
    #[must_use]
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a provider authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the client cannot be constructed.
    pub fn from_token(token: String) -> Result<Self, ProviderError> {
        let client = Octocrab::builder().personal_token(token).build()?;
        Ok(Self::new(client))
    }
}

impl RepositoryProvider for GitHubProvider {
    type Raw = serde_json::Value;

    fn repos(
        &self,
        options: RepoListOptions,
    ) -> BoxStream<'_, Result<RemoteRepository, ProviderError>> {
        let client = self.client.clone();

        stream::try_unfold(
            (client, options, PageCursor::First),
            |(client, options, cursor)| async move {
                let page = match cursor {
                    PageCursor::First => Some(
                        client
                            .current()
                            .list_repos_for_authenticated_user()
                            .type_(options.kind.as_str())
                            .per_page(options.per_page)
                            .send()
                            .await?,
                    ),
                    PageCursor::Next(next) => client.get_page::<Repository>(&next).await?,
                };

                Ok::<_, ProviderError>(page.map(|page| {
                    debug!(count = page.items.len(), "Fetched repository page");
                    let cursor = PageCursor::Next(page.next.clone());
                    let repositories = stream::iter(
                        page.items
                            .into_iter()
                            .map(map_repository)
                            .map(Ok::<_, ProviderError>),
                    );
                    (repositories, (client, options, cursor))
                }))
            },
        )
        .try_flatten()
        .boxed()
    }

    async fn request(&self, path: &str) -> Result<Self::Raw, ProviderError> {
        debug!(path, "Issuing raw provider request");
        Ok(self.client.get(path, None::<&()>).await?)
    }
}

/// Maps a GitHub API repository into the boundary value type.
///
/// Absent `fork` or `permissions` fields map to `false`: a repository
/// without visible push permission is ineligible, not a parse error.
fn map_repository(repository: Repository) -> RemoteRepository {
    RemoteRepository {
        name: repository.name,
        fork: repository.fork.unwrap_or(false),
        owner_login: repository
            .owner
            .map(|owner| owner.login)
            .unwrap_or_default(),
        permissions: RepositoryPermissions {
            push: repository
                .permissions
                .map(|permissions| permissions.push)
                .unwrap_or(false),
        },
    }
}

//! Remote repository values.

use serde::{Deserialize, Serialize};

/// What the authenticated account may do with a repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPermissions {
    /// Whether the account may push to the repository.
    pub push: bool,
}

/// A repository owned by the authenticated account.
///
/// Deserialized at the provider boundary so the reconciliation core never
/// inspects untyped API payloads. Read-only to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    /// Repository name.
    pub name: String,

    /// Whether the repository is a fork.
    pub fork: bool,

    /// Login of the repository owner.
    pub owner_login: String,

    /// Permissions the authenticated account holds on it.
    pub permissions: RepositoryPermissions,
}

impl RemoteRepository {
    /// Whether this repository qualifies for a catalog lookup: not a fork,
    /// and the authenticated account can push to it.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        !self.fork && self.permissions.push
    }
}

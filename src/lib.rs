#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod provider;
pub mod service;
pub mod store;

pub use provider::{
    GitHubProvider, ProviderError, RemoteRepository, RepoListOptions, RepositoryPermissions,
    RepositoryProvider, RepositoryType,
};
pub use service::{ModuleService, ServiceError};
pub use store::{
    CatalogStore, InMemoryCatalog, ModuleRecord, SortDirection, StoreError, CREATED_AT,
};

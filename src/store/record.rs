//! Catalog module record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered module held by the catalog.
///
/// Identity is the `name`; the remaining attributes are carried through
/// unchanged from whatever the store returns. The reconciliation core never
/// mutates a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Unique module name, matching the repository name it came from.
    pub name: String,

    /// Short description shown in listings.
    pub description: Option<String>,

    /// URL of the repository backing the module.
    pub url: Option<String>,

    /// When the module was registered. Listing order sorts on this.
    pub created_at: Option<DateTime<Utc>>,
}

impl ModuleRecord {
    /// Creates a record carrying only its identity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            url: None,
            created_at: None,
        }
    }

    /// Sets the registration timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

//! The capability every storage backend exposes to the caller-facing layer.

use crate::error::ValidationError;
use crate::store::StoreError;
use crate::types::{EntryId, IndexOptions, Namespace, QueryOptions, SearchResult};
use thiserror::Error;

mod range;
mod registry;

pub use range::RangeProvider;
pub use registry::{ProviderFactory, ProviderRegistry};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid provider config: {0}")]
    InvalidConfig(String),
}

/// A search backend. The `namespace` argument isolates datasets sharing one
/// backend.
///
/// All methods must be safe for concurrent use.
pub trait Provider: Send + Sync {
    /// Adds or fully replaces the entry `id`. `text` is tokenized per
    /// `options.strategy`; `display` is stored verbatim.
    fn index(
        &self,
        namespace: &Namespace,
        id: &EntryId,
        text: &str,
        display: &str,
        options: &IndexOptions,
    ) -> Result<(), ProviderError>;

    /// Returns at most `options.max_results` matches, or an empty vec.
    fn query(
        &self,
        namespace: &Namespace,
        query: &str,
        options: &QueryOptions,
    ) -> Result<Vec<SearchResult>, ProviderError>;

    /// Removes an entry. Removing an unknown id succeeds.
    fn delete(&self, namespace: &Namespace, id: &EntryId) -> Result<(), ProviderError>;

    /// Removes every entry in the namespace. Irreversible.
    fn delete_all(&self, namespace: &Namespace) -> Result<(), ProviderError>;

    /// Releases resources. Safe to call more than once.
    fn close(&self) -> Result<(), ProviderError>;
}

//! The narrow storage contract the search engine is written against.
//!
//! A backend provides four logical tables per namespace:
//! - token index: composite key → score, ordered by key bytes
//! - text: id → original text
//! - display: id → display text
//! - meta: id → [`EntryMeta`]

use crate::engine::KeyRange;
use crate::types::{EntryId, MatchStrategy, Namespace};
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Failure reported by the underlying storage engine, passed through verbatim.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("store is closed")]
    Closed,
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Tokenization parameters recorded at index time, so removal can rebuild the
/// exact token set even if the configuration changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub case_sensitive: bool,
    pub strategy: MatchStrategy,
    pub ngram_size: usize,
}

/// Side-table contents for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry {
    pub text: String,
    pub display: String,
    /// `None` for entries written without a meta record.
    pub meta: Option<EntryMeta>,
}

/// One entry's writes, applied in a single call.
///
/// Removals are applied before insertions so a re-index can drop and re-add
/// the same composite key.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryMutation {
    pub id: EntryId,
    pub remove_keys: Vec<Vec<u8>>,
    pub insert_keys: Vec<(Vec<u8>, f64)>,
    /// `Some` writes text, display and meta; `None` removes all three.
    pub record: Option<StoredEntry>,
}

/// An ordered key-value range store.
///
/// Implementations must be safe for concurrent use. Operations on a namespace
/// that was never written behave as if it were empty.
pub trait OrderedStore: Send + Sync {
    /// Returns `(composite key, score)` pairs in ascending key order, at most
    /// `limit` of them when a limit is given.
    fn scan(
        &self,
        namespace: &Namespace,
        range: &KeyRange,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, f64)>, StoreError>;

    fn entry(&self, namespace: &Namespace, id: &EntryId) -> Result<Option<StoredEntry>, StoreError>;

    fn display(&self, namespace: &Namespace, id: &EntryId) -> Result<Option<String>, StoreError>;

    fn apply(&self, namespace: &Namespace, mutation: EntryMutation) -> Result<(), StoreError>;

    /// Reads the entry stored under `id`, builds a mutation from it and applies
    /// it, with no other write to the namespace in between.
    fn replace(
        &self,
        namespace: &Namespace,
        id: &EntryId,
        build: &dyn Fn(Option<&StoredEntry>) -> EntryMutation,
    ) -> Result<(), StoreError>;

    /// Drops all four tables of the namespace.
    fn clear(&self, namespace: &Namespace) -> Result<(), StoreError>;

    /// Releases the backend. Idempotent; every other call fails afterwards.
    fn close(&self) -> Result<(), StoreError>;
}

/// Lets several providers share one backend.
impl<S: OrderedStore + ?Sized> OrderedStore for std::sync::Arc<S> {
    fn scan(
        &self,
        namespace: &Namespace,
        range: &KeyRange,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, f64)>, StoreError> {
        (**self).scan(namespace, range, limit)
    }

    fn entry(&self, namespace: &Namespace, id: &EntryId) -> Result<Option<StoredEntry>, StoreError> {
        (**self).entry(namespace, id)
    }

    fn display(&self, namespace: &Namespace, id: &EntryId) -> Result<Option<String>, StoreError> {
        (**self).display(namespace, id)
    }

    fn apply(&self, namespace: &Namespace, mutation: EntryMutation) -> Result<(), StoreError> {
        (**self).apply(namespace, mutation)
    }

    fn replace(
        &self,
        namespace: &Namespace,
        id: &EntryId,
        build: &dyn Fn(Option<&StoredEntry>) -> EntryMutation,
    ) -> Result<(), StoreError> {
        (**self).replace(namespace, id, build)
    }

    fn clear(&self, namespace: &Namespace) -> Result<(), StoreError> {
        (**self).clear(namespace)
    }

    fn close(&self) -> Result<(), StoreError> {
        (**self).close()
    }
}

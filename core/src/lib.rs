//! Pluggable substring and autocomplete search.
//!
//! Text is decomposed into tokens according to a [`MatchStrategy`], encoded
//! into an ordered key space and matched with range scans. Storage sits
//! behind the [`OrderedStore`] contract; [`RangeProvider`] turns any ordered
//! store into a [`Provider`], and [`Autocomplete`] is the validated front door.

pub mod autocomplete;
pub mod engine;
pub mod error;
pub mod provider;
pub mod store;
pub mod types;

pub use autocomplete::Autocomplete;
pub use error::{Error, Result, ValidationError};
pub use provider::{Provider, ProviderError, ProviderFactory, ProviderRegistry, RangeProvider};
pub use store::memory;
pub use store::{EntryMeta, EntryMutation, OrderedStore, StoreError, StoredEntry};
pub use types::{
    AutocompleteConfig, EntryId, IndexOptions, MatchStrategy, Namespace, Options, QueryOptions,
    SearchResult,
};

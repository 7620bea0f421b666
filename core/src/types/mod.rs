pub(crate) mod config;
pub use config::{AutocompleteConfig, ConfigError, Options, ProviderConfig};

pub(crate) mod id;
pub use id::{DEFAULT_NAMESPACE, EntryId, EntryIdError, MAX_NAMESPACE_LENGTH, Namespace, NamespaceError};

pub(crate) mod options;
pub use options::{DEFAULT_SCORE, IndexOptions, QueryOptions};

pub(crate) mod result;
pub use result::SearchResult;

pub(crate) mod strategy;
pub use strategy::{DEFAULT_NGRAM_SIZE, MatchStrategy, resolve_ngram_size};

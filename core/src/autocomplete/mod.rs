//! Caller-facing entry point: validates input, applies configured options and
//! forwards to a [`Provider`].

use crate::error::{Error, Result, ValidationError};
use crate::provider::{Provider, ProviderRegistry};
use crate::types::{
    AutocompleteConfig, DEFAULT_SCORE, EntryId, IndexOptions, Options, QueryOptions, SearchResult,
};

pub struct Autocomplete {
    provider: Box<dyn Provider>,
    options: Options,
}

impl Autocomplete {
    pub fn new(provider: Box<dyn Provider>, options: Options) -> Self {
        Self { provider, options }
    }

    /// Opens the provider named in `config` through `registry`.
    ///
    /// Returns [`Error::ProviderNotFound`] if the name is not registered.
    pub fn from_config(registry: &ProviderRegistry, config: &AutocompleteConfig) -> Result<Self> {
        let provider = registry.create(&config.provider.kind, &config.provider.settings)?;
        Ok(Self::new(provider, config.options.clone()))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    fn entry_id(id: &str) -> Result<EntryId> {
        EntryId::try_from(id).map_err(|_| ValidationError::EmptyId.into())
    }
}

impl Autocomplete {
    /// Adds or replaces an entry. `text` is what queries match against;
    /// `display` is what results show.
    pub fn index(&self, id: &str, text: &str, display: &str) -> Result<()> {
        let id = Self::entry_id(id)?;
        if text.is_empty() {
            return Err(ValidationError::EmptyText.into());
        }
        if display.is_empty() {
            return Err(ValidationError::EmptyDisplay.into());
        }

        let options = IndexOptions {
            score: DEFAULT_SCORE,
            strategy: self.options.strategy,
            ngram_size: self.options.ngram_size,
            case_sensitive: self.options.case_sensitive,
        };

        self.provider
            .index(&self.options.namespace, &id, text, display, &options)?;
        Ok(())
    }

    /// Finds entries matching `query`. A `limit` of zero uses the configured
    /// default limit.
    pub fn query(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let len = query.chars().count();
        if len < self.options.min_query_length {
            return Err(ValidationError::QueryTooShort {
                len,
                min: self.options.min_query_length,
            }
            .into());
        }

        let limit = if limit == 0 {
            self.options.default_limit
        } else {
            limit
        };
        if limit > self.options.max_limit {
            return Err(ValidationError::LimitExceeded {
                limit,
                max: self.options.max_limit,
            }
            .into());
        }

        let options = QueryOptions {
            max_results: limit,
            case_sensitive: self.options.case_sensitive,
            strategy: self.options.strategy,
            ngram_size: self.options.ngram_size,
            ..QueryOptions::default()
        };

        Ok(self
            .provider
            .query(&self.options.namespace, query, &options)?)
    }

    /// Removes an entry. Removing an unknown id succeeds.
    pub fn delete(&self, id: &str) -> Result<()> {
        let id = Self::entry_id(id)?;
        self.provider.delete(&self.options.namespace, &id)?;
        Ok(())
    }

    /// Removes every entry in the configured namespace. Irreversible.
    pub fn delete_all(&self) -> Result<()> {
        self.provider.delete_all(&self.options.namespace)?;
        Ok(())
    }

    pub fn close(&self) -> Result<()> {
        self.provider.close().map_err(Error::from)
    }
}

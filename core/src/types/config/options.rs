use crate::types::{DEFAULT_NGRAM_SIZE, MatchStrategy, Namespace};
use serde::{Deserialize, Serialize};

/// Behavior settings shared by every provider.
///
/// Changing `strategy`, `ngram_size` or `case_sensitive` requires reindexing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Number of results when the caller passes a limit of zero.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default)]
    pub case_sensitive: bool,
    /// Minimum query length in chars.
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
    #[serde(default)]
    pub namespace: Namespace,
    #[serde(default)]
    pub strategy: MatchStrategy,
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            case_sensitive: false,
            min_query_length: default_min_query_length(),
            namespace: Namespace::default(),
            strategy: MatchStrategy::default(),
            ngram_size: default_ngram_size(),
        }
    }
}

impl Options {
    /// Validates option values and returns list of validation errors.
    /// Returns empty vec if options are valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.default_limit == 0 {
            errors.push("default_limit must be at least 1".to_string());
        }

        if self.max_limit == 0 {
            errors.push("max_limit must be at least 1".to_string());
        }

        if self.default_limit > self.max_limit {
            errors.push(format!(
                "default_limit ({}) must not exceed max_limit ({})",
                self.default_limit, self.max_limit
            ));
        }

        if self.ngram_size == 0 {
            errors.push("ngram_size must be at least 1".to_string());
        }

        errors
    }

    /// Returns options with invalid values replaced by defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let max_limit = if self.max_limit == 0 {
            default_max_limit()
        } else {
            self.max_limit
        };
        let default_limit = if self.default_limit == 0 || self.default_limit > max_limit {
            default_limit().min(max_limit)
        } else {
            self.default_limit
        };

        Self {
            default_limit,
            max_limit,
            case_sensitive: self.case_sensitive,
            min_query_length: self.min_query_length,
            namespace: self.namespace.clone(),
            strategy: self.strategy,
            ngram_size: if self.ngram_size == 0 {
                default_ngram_size()
            } else {
                self.ngram_size
            },
        }
    }
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

fn default_min_query_length() -> usize {
    1
}

fn default_ngram_size() -> usize {
    DEFAULT_NGRAM_SIZE
}

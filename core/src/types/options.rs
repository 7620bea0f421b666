use crate::types::{DEFAULT_NGRAM_SIZE, MatchStrategy};

/// Score stored with every token when the caller does not supply one.
pub const DEFAULT_SCORE: f64 = 1.0;

/// Per-entry tokenization parameters passed to [`crate::Provider::index`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexOptions {
    pub score: f64,
    pub strategy: MatchStrategy,
    /// Only used by `NGram` and `NOrMoreGram`. Zero selects the default.
    pub ngram_size: usize,
    pub case_sensitive: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            score: DEFAULT_SCORE,
            strategy: MatchStrategy::default(),
            ngram_size: DEFAULT_NGRAM_SIZE,
            case_sensitive: false,
        }
    }
}

/// Query parameters passed to [`crate::Provider::query`].
///
/// `strategy` and `ngram_size` must match the values used at index time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryOptions {
    pub max_results: usize,
    pub case_sensitive: bool,
    pub strategy: MatchStrategy,
    pub ngram_size: usize,
    /// Hits whose stored score is below this threshold are ignored.
    pub min_score: f64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            max_results: 10,
            case_sensitive: false,
            strategy: MatchStrategy::default(),
            ngram_size: DEFAULT_NGRAM_SIZE,
            min_score: f64::NEG_INFINITY,
        }
    }
}

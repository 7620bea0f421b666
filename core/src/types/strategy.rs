use serde::{Deserialize, Serialize};
use std::fmt;

/// Default n-gram size (trigrams).
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// How indexed text is decomposed into tokens and how queries are matched.
///
/// The strategy used at query time must match the one used at index time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Every prefix of the text. "mum" matches "Mumbai" but not "Jammu".
    Prefix,
    /// Every contiguous substring of exactly `n` chars.
    NGram,
    /// Every contiguous substring of `n` or more chars.
    NOrMoreGram,
    /// Every contiguous substring.
    #[default]
    Substring,
}

impl MatchStrategy {
    /// Positional strategies tag each token with its starting offset.
    pub fn is_positional(self) -> bool {
        !matches!(self, MatchStrategy::Prefix)
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Prefix => write!(f, "prefix"),
            MatchStrategy::NGram => write!(f, "n_gram"),
            MatchStrategy::NOrMoreGram => write!(f, "n_or_more_gram"),
            MatchStrategy::Substring => write!(f, "substring"),
        }
    }
}

/// Zero means "not specified" and resolves to [`DEFAULT_NGRAM_SIZE`].
pub fn resolve_ngram_size(size: usize) -> usize {
    if size == 0 { DEFAULT_NGRAM_SIZE } else { size }
}

//! Decomposes text into search tokens according to a [`MatchStrategy`].
//!
//! Offsets are char offsets, never byte offsets, so multi-byte text is never
//! split inside a code point.

use crate::types::{MatchStrategy, resolve_ngram_size};
use std::borrow::Cow;

/// A derived substring used as a search key.
///
/// Prefix tokens carry no position: the token itself is the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token {
    pub text: String,
    pub position: Option<usize>,
}

impl Token {
    fn prefix(text: String) -> Self {
        Self {
            text,
            position: None,
        }
    }

    fn positional(text: String, position: usize) -> Self {
        Self {
            text,
            position: Some(position),
        }
    }
}

/// Lowercases `text` unless the entry or query is case-sensitive.
pub fn normalize(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Produces every token `strategy` derives from `text`.
///
/// `ngram_size` is only read by the n-gram strategies; zero selects the default.
pub fn tokenize(
    text: &str,
    strategy: MatchStrategy,
    ngram_size: usize,
    case_sensitive: bool,
) -> Vec<Token> {
    let text = normalize(text, case_sensitive);
    let chars: Vec<char> = text.chars().collect();

    match strategy {
        MatchStrategy::Prefix => prefixes(&chars),
        MatchStrategy::NGram => ngrams(&chars, resolve_ngram_size(ngram_size)),
        MatchStrategy::NOrMoreGram => substrings(&chars, resolve_ngram_size(ngram_size)),
        MatchStrategy::Substring => substrings(&chars, 1),
    }
}

/// Every token any strategy could have produced for `text`: all prefixes plus
/// all positional substrings.
///
/// Used to clean up entries whose index-time strategy was never recorded.
pub fn legacy_tokens(text: &str, case_sensitive: bool) -> Vec<Token> {
    let text = normalize(text, case_sensitive);
    let chars: Vec<char> = text.chars().collect();

    let mut tokens = prefixes(&chars);
    tokens.extend(substrings(&chars, 1));
    tokens
}

fn prefixes(chars: &[char]) -> Vec<Token> {
    (1..=chars.len())
        .map(|end| Token::prefix(chars[..end].iter().collect()))
        .collect()
}

fn ngrams(chars: &[char], n: usize) -> Vec<Token> {
    if chars.len() < n {
        return Vec::new();
    }
    chars
        .windows(n)
        .enumerate()
        .map(|(start, window)| Token::positional(window.iter().collect(), start))
        .collect()
}

/// All substrings of at least `min_len` chars, tagged with their start offset.
fn substrings(chars: &[char], min_len: usize) -> Vec<Token> {
    let len = chars.len();
    let mut tokens = Vec::new();
    for start in 0..len {
        for end in (start + min_len)..=len {
            tokens.push(Token::positional(chars[start..end].iter().collect(), start));
        }
    }
    tokens
}

/// Splits a query into all overlapping windows of exactly `n` chars.
///
/// Returns an empty vec when the query is shorter than `n`.
pub fn sliding_windows(query: &str, n: usize) -> Vec<String> {
    let chars: Vec<char> = query.chars().collect();
    if n == 0 || chars.len() < n {
        return Vec::new();
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

#[cfg(test)]
mod tests;

//! Turns a query string into range scans over the token index.

use crate::engine::tokenizer::{normalize, sliding_windows};
use crate::types::{EntryId, MatchStrategy, QueryOptions, resolve_ngram_size};
use std::collections::HashSet;

/// A range scan page asks for this many keys per wanted result, since the
/// same id shows up once per matching prefix or position.
pub const DUPLICATE_OVERSAMPLE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// Nothing can match; no scan is issued.
    Empty,
    /// Scans over every key whose token extends `token`, `scan_limit` keys
    /// per page.
    Range { token: String, scan_limit: usize },
    /// One unbounded scan per window; an id must appear in every window.
    SlidingWindow { windows: Vec<String> },
}

pub fn plan(query: &str, options: &QueryOptions) -> QueryPlan {
    if query.is_empty() || options.max_results == 0 {
        return QueryPlan::Empty;
    }

    let query = normalize(query, options.case_sensitive);
    let len = query.chars().count();

    match options.strategy {
        MatchStrategy::NGram => {
            let n = resolve_ngram_size(options.ngram_size);
            if len > n {
                let windows = sliding_windows(&query, n);
                // No partial-window fallback.
                if windows.is_empty() || windows.iter().any(|w| w.chars().count() < n) {
                    return QueryPlan::Empty;
                }
                return QueryPlan::SlidingWindow { windows };
            }
        }
        MatchStrategy::NOrMoreGram => {
            // No token shorter than n was ever written.
            if len < resolve_ngram_size(options.ngram_size) {
                return QueryPlan::Empty;
            }
        }
        MatchStrategy::Prefix | MatchStrategy::Substring => {}
    }

    QueryPlan::Range {
        token: query.into_owned(),
        scan_limit: options.max_results.saturating_mul(DUPLICATE_OVERSAMPLE),
    }
}

/// Ids present in every set, in the order of the first set, capped at `cap`.
///
/// This proves each window occurs somewhere in the entry's text, not that the
/// windows are contiguous or ordered as in the query: "abcab" matches the
/// query "cabc" for n = 3 even though it does not contain it.
pub fn intersect<T>(sets: Vec<Vec<(EntryId, T)>>, cap: usize) -> Vec<(EntryId, T)> {
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return Vec::new();
    };

    let rest: Vec<HashSet<EntryId>> = sets
        .map(|set| set.into_iter().map(|(id, _)| id).collect())
        .collect();

    first
        .into_iter()
        .filter(|(id, _)| rest.iter().all(|set| set.contains(id)))
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests;

//! Collapses raw scan hits into ids and fetches their display text.

use crate::engine::key::CompositeKey;
use crate::store::{OrderedStore, StoreError};
use crate::types::{EntryId, Namespace, SearchResult};
use std::collections::HashSet;

/// Collects distinct ids from scan hits in first-seen order, with the score of
/// their first hit, until `cap` ids are held.
///
/// Keys that fail to decode are skipped, as are hits scored below `min_score`.
/// Hits may arrive over several pages; duplicates across pages collapse.
pub struct IdCollector {
    positional: bool,
    min_score: f64,
    cap: usize,
    seen: HashSet<EntryId>,
    ids: Vec<(EntryId, f64)>,
}

impl IdCollector {
    pub fn new(positional: bool, min_score: f64, cap: usize) -> Self {
        Self {
            positional,
            min_score,
            cap,
            seen: HashSet::new(),
            ids: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.cap
    }

    pub fn extend(&mut self, hits: &[(Vec<u8>, f64)]) {
        for (key, score) in hits {
            if self.is_full() {
                break;
            }
            if *score < self.min_score {
                continue;
            }
            let Some(decoded) = CompositeKey::decode(key, self.positional) else {
                tracing::trace!(key = ?key, "skipping malformed composite key");
                continue;
            };
            if self.seen.insert(decoded.id.clone()) {
                self.ids.push((decoded.id, *score));
            }
        }
    }

    pub fn into_ids(self) -> Vec<(EntryId, f64)> {
        self.ids
    }
}

/// [`IdCollector`] over a single batch of hits.
pub fn distinct_ids(
    hits: &[(Vec<u8>, f64)],
    positional: bool,
    min_score: f64,
    cap: usize,
) -> Vec<(EntryId, f64)> {
    let mut collector = IdCollector::new(positional, min_score, cap);
    collector.extend(hits);
    collector.into_ids()
}

/// Fetches display text for each id. Ids whose display text has vanished,
/// e.g. through a concurrent delete, are dropped.
pub fn assemble<S: OrderedStore + ?Sized>(
    store: &S,
    namespace: &Namespace,
    ids: Vec<(EntryId, f64)>,
) -> Result<Vec<SearchResult>, StoreError> {
    let mut results = Vec::with_capacity(ids.len());
    for (id, score) in ids {
        let Some(display) = store.display(namespace, &id)? else {
            continue;
        };
        results.push(SearchResult { id, display, score });
    }
    Ok(results)
}

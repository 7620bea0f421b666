use crate::types::EntryId;
use serde::{Deserialize, Serialize};

/// A single match returned by a query.
///
/// `score` is the value supplied at index time; results are not ranked by
/// match quality.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: EntryId,
    pub display: String,
    pub score: f64,
}

//! Builds the token-index writes for indexing and removing an entry.
//!
//! Both directions derive keys from the same tokenizer call, so a removal
//! deletes exactly the keys the matching index call wrote.

use crate::engine::key::CompositeKey;
use crate::engine::tokenizer::{Token, legacy_tokens, tokenize};
use crate::error::ValidationError;
use crate::store::{EntryMeta, EntryMutation, StoredEntry};
use crate::types::{EntryId, IndexOptions};

pub fn check_record(text: &str, display: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if display.is_empty() {
        return Err(ValidationError::EmptyDisplay);
    }
    Ok(())
}

/// Writes for indexing `text` under `id`, replacing `previous` if present.
pub fn index_mutation(
    id: &EntryId,
    text: &str,
    display: &str,
    options: &IndexOptions,
    previous: Option<&StoredEntry>,
) -> EntryMutation {
    let meta = EntryMeta {
        case_sensitive: options.case_sensitive,
        strategy: options.strategy,
        ngram_size: options.ngram_size,
    };

    let insert_keys = entry_keys(id, text, Some(meta))
        .into_iter()
        .map(|key| (key, options.score))
        .collect();

    EntryMutation {
        id: id.clone(),
        remove_keys: previous.map(|entry| stored_keys(id, entry)).unwrap_or_default(),
        insert_keys,
        record: Some(StoredEntry {
            text: text.to_string(),
            display: display.to_string(),
            meta: Some(meta),
        }),
    }
}

/// Writes removing `previous` and its side-table records.
pub fn removal_mutation(id: &EntryId, previous: Option<&StoredEntry>) -> EntryMutation {
    EntryMutation {
        id: id.clone(),
        remove_keys: previous.map(|entry| stored_keys(id, entry)).unwrap_or_default(),
        insert_keys: Vec::new(),
        record: None,
    }
}

/// The composite keys currently held in the token index for a stored entry.
pub fn stored_keys(id: &EntryId, entry: &StoredEntry) -> Vec<Vec<u8>> {
    entry_keys(id, &entry.text, entry.meta)
}

/// Entries without a meta record predate it: they were indexed lowercased with
/// an unknown strategy, so every candidate key is removed.
fn entry_keys(id: &EntryId, text: &str, meta: Option<EntryMeta>) -> Vec<Vec<u8>> {
    let tokens = match meta {
        Some(meta) => tokenize(text, meta.strategy, meta.ngram_size, meta.case_sensitive),
        None => legacy_tokens(text, false),
    };
    encode(id, tokens)
}

fn encode(id: &EntryId, tokens: Vec<Token>) -> Vec<Vec<u8>> {
    tokens
        .into_iter()
        .map(|token| CompositeKey::encode(&token.text, id, token.position))
        .collect()
}

//! In-process ordered store backed by a `BTreeMap` per namespace.

use crate::engine::KeyRange;
use crate::provider::{Provider, ProviderRegistry, RangeProvider};
use crate::store::{EntryMeta, EntryMutation, OrderedStore, StoreError, StoredEntry};
use crate::types::{EntryId, Namespace};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

/// Name under which [`register`] adds this backend.
pub const PROVIDER_NAME: &str = "memory";

#[derive(Debug, Default)]
struct Tables {
    tokens: BTreeMap<Vec<u8>, f64>,
    text: HashMap<EntryId, String>,
    display: HashMap<EntryId, String>,
    meta: HashMap<EntryId, EntryMeta>,
}

impl Tables {
    fn entry(&self, id: &EntryId) -> Option<StoredEntry> {
        let text = self.text.get(id)?;
        Some(StoredEntry {
            text: text.clone(),
            display: self.display.get(id).cloned().unwrap_or_default(),
            meta: self.meta.get(id).copied(),
        })
    }

    fn apply(&mut self, mutation: EntryMutation) {
        for key in &mutation.remove_keys {
            self.tokens.remove(key);
        }
        self.tokens.extend(mutation.insert_keys);

        let id = mutation.id;
        match mutation.record {
            Some(record) => {
                self.text.insert(id.clone(), record.text);
                self.display.insert(id.clone(), record.display);
                match record.meta {
                    Some(meta) => self.meta.insert(id, meta),
                    None => self.meta.remove(&id),
                };
            }
            None => {
                self.text.remove(&id);
                self.display.remove(&id);
                self.meta.remove(&id);
            }
        }
    }
}

/// `None` once closed.
#[derive(Debug)]
pub struct MemoryStore {
    namespaces: RwLock<Option<HashMap<Namespace, Tables>>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            namespaces: RwLock::new(Some(HashMap::new())),
        }
    }
}

impl OrderedStore for MemoryStore {
    fn scan(
        &self,
        namespace: &Namespace,
        range: &KeyRange,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, f64)>, StoreError> {
        let guard = self.namespaces.read();
        let namespaces = guard.as_ref().ok_or(StoreError::Closed)?;
        let Some(tables) = namespaces.get(namespace) else {
            return Ok(Vec::new());
        };

        let hits = tables
            .tokens
            .range::<[u8], _>(range.bounds())
            .map(|(key, score)| (key.clone(), *score));

        Ok(match limit {
            Some(limit) => hits.take(limit).collect(),
            None => hits.collect(),
        })
    }

    fn entry(&self, namespace: &Namespace, id: &EntryId) -> Result<Option<StoredEntry>, StoreError> {
        let guard = self.namespaces.read();
        let namespaces = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(namespaces.get(namespace).and_then(|tables| tables.entry(id)))
    }

    fn display(&self, namespace: &Namespace, id: &EntryId) -> Result<Option<String>, StoreError> {
        let guard = self.namespaces.read();
        let namespaces = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(namespaces
            .get(namespace)
            .and_then(|tables| tables.display.get(id).cloned()))
    }

    fn apply(&self, namespace: &Namespace, mutation: EntryMutation) -> Result<(), StoreError> {
        let mut guard = self.namespaces.write();
        let namespaces = guard.as_mut().ok_or(StoreError::Closed)?;
        namespaces.entry(namespace.clone()).or_default().apply(mutation);
        Ok(())
    }

    fn replace(
        &self,
        namespace: &Namespace,
        id: &EntryId,
        build: &dyn Fn(Option<&StoredEntry>) -> EntryMutation,
    ) -> Result<(), StoreError> {
        let mut guard = self.namespaces.write();
        let namespaces = guard.as_mut().ok_or(StoreError::Closed)?;
        let tables = namespaces.entry(namespace.clone()).or_default();

        let previous = tables.entry(id);
        tables.apply(build(previous.as_ref()));
        Ok(())
    }

    fn clear(&self, namespace: &Namespace) -> Result<(), StoreError> {
        let mut guard = self.namespaces.write();
        let namespaces = guard.as_mut().ok_or(StoreError::Closed)?;
        namespaces.remove(namespace);
        Ok(())
    }

    fn close(&self) -> Result<(), StoreError> {
        self.namespaces.write().take();
        Ok(())
    }
}

/// Registers the in-memory backend. It takes no settings.
pub fn register(registry: &mut ProviderRegistry) {
    registry.register(PROVIDER_NAME, |_settings| {
        Ok(Box::new(RangeProvider::new(MemoryStore::new())) as Box<dyn Provider>)
    });
}

//! redb-backed ordered store.
//!
//! Each namespace owns four tables, created on first write:
//! - `tokens/{ns}`: composite key → score
//! - `text/{ns}`: id → original text
//! - `display/{ns}`: id → display text
//! - `meta/{ns}`: id → [`VersionedMeta`]
//!
//! Every [`OrderedStore::apply`] and [`OrderedStore::replace`] runs in one
//! write transaction, so an entry's tokens and side records change together.

use crate::error::DatabaseError;
use crate::meta::VersionedMeta;
use lexis_core::engine::KeyRange;
use lexis_core::{EntryId, EntryMutation, Namespace, OrderedStore, StoreError, StoredEntry};
use parking_lot::RwLock;
use redb::{
    ReadOnlyTable, ReadTransaction, ReadableDatabase, ReadableTable, TableDefinition, TableError,
    WriteTransaction,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Settings read from the `[provider]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedbConfig {
    /// Database file; parent directories are created as needed.
    pub path: PathBuf,
}

struct TableNames {
    tokens: String,
    text: String,
    display: String,
    meta: String,
}

impl TableNames {
    fn new(namespace: &Namespace) -> Self {
        Self {
            tokens: format!("tokens/{namespace}"),
            text: format!("text/{namespace}"),
            display: format!("display/{namespace}"),
            meta: format!("meta/{namespace}"),
        }
    }

    fn tokens(&self) -> TableDefinition<'_, &'static [u8], f64> {
        TableDefinition::new(&self.tokens)
    }

    fn text(&self) -> TableDefinition<'_, &'static str, &'static str> {
        TableDefinition::new(&self.text)
    }

    fn display(&self) -> TableDefinition<'_, &'static str, &'static str> {
        TableDefinition::new(&self.display)
    }

    fn meta(&self) -> TableDefinition<'_, &'static str, VersionedMeta> {
        TableDefinition::new(&self.meta)
    }
}

/// A namespace that was never written has no tables yet.
fn open_existing<K: redb::Key + 'static, V: redb::Value + 'static>(
    txn: &ReadTransaction,
    definition: TableDefinition<K, V>,
) -> Result<Option<ReadOnlyTable<K, V>>, DatabaseError> {
    match txn.open_table(definition) {
        Ok(table) => Ok(Some(table)),
        Err(TableError::TableDoesNotExist(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// `None` once closed.
pub struct RedbStore {
    db: RwLock<Option<redb::Database>>,
}

impl RedbStore {
    /// Creates or opens the database file at `config.path`.
    pub fn open(config: &RedbConfig) -> Result<Self, DatabaseError> {
        if let Some(parent) = config.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = redb::Database::create(&config.path)?;
        tracing::info!(path = %config.path.display(), "opened redb store");

        Ok(Self {
            db: RwLock::new(Some(db)),
        })
    }

    fn with_db<T>(
        &self,
        f: impl FnOnce(&redb::Database) -> Result<T, DatabaseError>,
    ) -> Result<T, StoreError> {
        let guard = self.db.read();
        let db = guard.as_ref().ok_or(DatabaseError::Closed)?;
        Ok(f(db)?)
    }
}

/// Read operations.
impl RedbStore {
    fn scan_tokens(
        db: &redb::Database,
        names: &TableNames,
        range: &KeyRange,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, f64)>, DatabaseError> {
        let read_txn = db.begin_read()?;
        let Some(table) = open_existing(&read_txn, names.tokens())? else {
            return Ok(Vec::new());
        };

        let limit = limit.unwrap_or(usize::MAX);
        let mut hits = Vec::new();
        for entry in table.range::<&[u8]>(range.bounds())? {
            if hits.len() >= limit {
                break;
            }
            let (key, score) = entry?;
            hits.push((key.value().to_vec(), score.value()));
        }
        Ok(hits)
    }

    fn read_string(
        txn: &ReadTransaction,
        definition: TableDefinition<&'static str, &'static str>,
        id: &EntryId,
    ) -> Result<Option<String>, DatabaseError> {
        let Some(table) = open_existing(txn, definition)? else {
            return Ok(None);
        };
        Ok(table.get(id.as_str())?.map(|guard| guard.value().to_string()))
    }

    fn read_entry(
        db: &redb::Database,
        names: &TableNames,
        id: &EntryId,
    ) -> Result<Option<StoredEntry>, DatabaseError> {
        let read_txn = db.begin_read()?;
        let Some(text) = Self::read_string(&read_txn, names.text(), id)? else {
            return Ok(None);
        };
        let display = Self::read_string(&read_txn, names.display(), id)?.unwrap_or_default();
        let meta = match open_existing(&read_txn, names.meta())? {
            Some(table) => table.get(id.as_str())?.map(|guard| guard.value().into()),
            None => None,
        };

        Ok(Some(StoredEntry {
            text,
            display,
            meta,
        }))
    }
}

/// Write operations.
impl RedbStore {
    fn write_mutation(
        db: &redb::Database,
        names: &TableNames,
        mutation: &EntryMutation,
    ) -> Result<(), DatabaseError> {
        let write_txn = db.begin_write()?;
        Self::write_in(&write_txn, names, mutation)?;
        write_txn.commit()?;
        Ok(())
    }

    /// Reads and writes in one write transaction. redb admits one writer at a
    /// time, so nothing lands between the read and the write.
    fn replace_entry(
        db: &redb::Database,
        names: &TableNames,
        id: &EntryId,
        build: &dyn Fn(Option<&StoredEntry>) -> EntryMutation,
    ) -> Result<(), DatabaseError> {
        let write_txn = db.begin_write()?;
        let previous = Self::entry_in(&write_txn, names, id)?;
        let mutation = build(previous.as_ref());
        Self::write_in(&write_txn, names, &mutation)?;
        write_txn.commit()?;
        Ok(())
    }

    fn entry_in(
        txn: &WriteTransaction,
        names: &TableNames,
        id: &EntryId,
    ) -> Result<Option<StoredEntry>, DatabaseError> {
        let texts = txn.open_table(names.text())?;
        let Some(text) = texts.get(id.as_str())?.map(|guard| guard.value().to_string()) else {
            return Ok(None);
        };
        let display = txn
            .open_table(names.display())?
            .get(id.as_str())?
            .map(|guard| guard.value().to_string())
            .unwrap_or_default();
        let meta = txn
            .open_table(names.meta())?
            .get(id.as_str())?
            .map(|guard| guard.value().into());

        Ok(Some(StoredEntry {
            text,
            display,
            meta,
        }))
    }

    fn write_in(
        txn: &WriteTransaction,
        names: &TableNames,
        mutation: &EntryMutation,
    ) -> Result<(), DatabaseError> {
        let mut tokens = txn.open_table(names.tokens())?;
        for key in &mutation.remove_keys {
            tokens.remove(key.as_slice())?;
        }
        for (key, score) in &mutation.insert_keys {
            tokens.insert(key.as_slice(), *score)?;
        }

        let mut text = txn.open_table(names.text())?;
        let mut display = txn.open_table(names.display())?;
        let mut meta = txn.open_table(names.meta())?;
        let id = mutation.id.as_str();

        match &mutation.record {
            Some(record) => {
                text.insert(id, record.text.as_str())?;
                display.insert(id, record.display.as_str())?;
                match record.meta {
                    Some(entry_meta) => {
                        meta.insert(id, &VersionedMeta::from(entry_meta))?;
                    }
                    None => {
                        meta.remove(id)?;
                    }
                }
            }
            None => {
                text.remove(id)?;
                display.remove(id)?;
                meta.remove(id)?;
            }
        }
        Ok(())
    }

    fn drop_tables(db: &redb::Database, names: &TableNames) -> Result<(), DatabaseError> {
        let write_txn = db.begin_write()?;
        write_txn.delete_table(names.tokens())?;
        write_txn.delete_table(names.text())?;
        write_txn.delete_table(names.display())?;
        write_txn.delete_table(names.meta())?;
        write_txn.commit()?;
        Ok(())
    }
}

impl OrderedStore for RedbStore {
    fn scan(
        &self,
        namespace: &Namespace,
        range: &KeyRange,
        limit: Option<usize>,
    ) -> Result<Vec<(Vec<u8>, f64)>, StoreError> {
        let names = TableNames::new(namespace);
        self.with_db(|db| Self::scan_tokens(db, &names, range, limit))
    }

    fn entry(&self, namespace: &Namespace, id: &EntryId) -> Result<Option<StoredEntry>, StoreError> {
        let names = TableNames::new(namespace);
        self.with_db(|db| Self::read_entry(db, &names, id))
    }

    fn display(&self, namespace: &Namespace, id: &EntryId) -> Result<Option<String>, StoreError> {
        let names = TableNames::new(namespace);
        self.with_db(|db| {
            let read_txn = db.begin_read()?;
            Self::read_string(&read_txn, names.display(), id)
        })
    }

    fn apply(&self, namespace: &Namespace, mutation: EntryMutation) -> Result<(), StoreError> {
        let names = TableNames::new(namespace);
        self.with_db(|db| Self::write_mutation(db, &names, &mutation))
    }

    fn replace(
        &self,
        namespace: &Namespace,
        id: &EntryId,
        build: &dyn Fn(Option<&StoredEntry>) -> EntryMutation,
    ) -> Result<(), StoreError> {
        let names = TableNames::new(namespace);
        self.with_db(|db| Self::replace_entry(db, &names, id, build))
    }

    fn clear(&self, namespace: &Namespace) -> Result<(), StoreError> {
        let names = TableNames::new(namespace);
        self.with_db(|db| Self::drop_tables(db, &names))
    }

    fn close(&self) -> Result<(), StoreError> {
        if self.db.write().take().is_some() {
            tracing::info!("closed redb store");
        }
        Ok(())
    }
}

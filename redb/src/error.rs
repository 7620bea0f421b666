use lexis_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Redb(#[from] redb::DatabaseError),

    #[error("Table error: {0}")]
    TableError(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    StorageError(#[from] redb::StorageError),

    #[error("Transaction error: {0}")]
    TransactionError(#[from] redb::TransactionError),

    #[error("Commit error: {0}")]
    CommitError(#[from] redb::CommitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database is closed")]
    Closed,
}

impl From<DatabaseError> for StoreError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Closed => StoreError::Closed,
            err => StoreError::backend(err),
        }
    }
}

use redb::Database as RedbDatabase;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::keys::*;
use crate::catalog::models::Book;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Commit error: {0}")]
    Commit(Box<redb::CommitError>),
    #[error("Database error: {0}")]
    Redb(Box<redb::Error>),
    #[error("Database error: {0}")]
    RedbDatabase(Box<redb::DatabaseError>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(Box<redb::StorageError>),
    #[error("Table error: {0}")]
    Table(Box<redb::TableError>),
    #[error("Transaction error: {0}")]
    Transaction(Box<redb::TransactionError>),
}

impl From<redb::CommitError> for DatabaseError {
    fn from(e: redb::CommitError) -> Self {
        DatabaseError::Commit(Box::new(e))
    }
}

impl From<redb::DatabaseError> for DatabaseError {
    fn from(e: redb::DatabaseError) -> Self {
        DatabaseError::RedbDatabase(Box::new(e))
    }
}

impl From<redb::Error> for DatabaseError {
    fn from(e: redb::Error) -> Self {
        DatabaseError::Redb(Box::new(e))
    }
}

impl From<redb::StorageError> for DatabaseError {
    fn from(e: redb::StorageError) -> Self {
        DatabaseError::Storage(Box::new(e))
    }
}

impl From<redb::TableError> for DatabaseError {
    fn from(e: redb::TableError) -> Self {
        DatabaseError::Table(Box::new(e))
    }
}

impl From<redb::TransactionError> for DatabaseError {
    fn from(e: redb::TransactionError) -> Self {
        DatabaseError::Transaction(Box::new(e))
    }
}

/// Durable key-value store for the catalog. Every write is a full
/// snapshot under a fixed key; there is no incremental diffing.
pub struct Database {
    db: Arc<RedbDatabase>,
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl Database {
    /// Open or create a database at the given path
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(data_dir.as_ref())?;
        let db_path = data_dir.as_ref().join("book-catalog.redb");
        let db = Arc::new(RedbDatabase::create(db_path)?);

        // Initialize the library table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LIBRARY)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(LIBRARY)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LIBRARY)?;
        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    /// Overwrite the stored book list with a full snapshot.
    pub fn put_books(&self, books: &[Book]) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(books)?;
        self.put_raw(BOOKS_KEY, &json)
    }

    /// Load the stored book list. A missing value reads as `None`; a
    /// malformed value is logged and also reads as `None`, so the caller
    /// falls back to the seed dataset instead of failing startup.
    pub fn get_books(&self) -> Result<Option<Vec<Book>>, DatabaseError> {
        let raw = match self.get_raw(BOOKS_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match serde_json::from_str(&raw) {
            Ok(books) => Ok(Some(books)),
            Err(e) => {
                tracing::warn!(error = %e, "Stored book list is malformed, treating as absent");
                Ok(None)
            }
        }
    }

    pub fn put_authenticated(&self, authenticated: bool) -> Result<(), DatabaseError> {
        self.put_raw(AUTH_KEY, if authenticated { "true" } else { "false" })
    }

    /// Anything other than the literal "true" reads as unauthenticated.
    pub fn get_authenticated(&self) -> Result<bool, DatabaseError> {
        Ok(self.get_raw(AUTH_KEY)?.as_deref() == Some("true"))
    }

    /// Raw write access under an arbitrary key. Lets tests plant
    /// malformed values; not used by the catalog itself.
    pub fn put_raw_value(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.put_raw(key, value)
    }
}

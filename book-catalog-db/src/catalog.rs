//! The catalog store: one owned connection plus the operations on it.

use std::path::{Path, PathBuf};

use book_catalog_core::{Book, GroupBy, GroupCount, NewBook};
use rusqlite::Connection;

use crate::operations::{self, OperationError};
use crate::queries;
use crate::schema::{self, DATABASE_FILE_NAME, SchemaError};

/// Handle to an open catalog database.
///
/// Constructed once at startup; the connection closes when this is dropped.
pub struct Catalog {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Catalog {
    /// Open (creating if needed) `books.db` inside `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self, SchemaError> {
        let path = data_dir.join(DATABASE_FILE_NAME);
        let conn = schema::open_database(&path)?;
        Ok(Self {
            conn,
            path: Some(path),
        })
    }

    /// An empty catalog that lives only in memory.
    pub fn open_in_memory() -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_memory()?,
            path: None,
        })
    }

    /// Path of the database file, or `None` for an in-memory catalog.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn add_book(&self, book: NewBook) -> Result<Book, OperationError> {
        operations::add_book(&self.conn, book)
    }

    pub fn list_books(&self) -> Result<Vec<Book>, OperationError> {
        queries::list_books(&self.conn)
    }

    pub fn books_by_id(&self) -> Result<Vec<Book>, OperationError> {
        queries::books_by_id(&self.conn)
    }

    pub fn search_books(&self, keyword: &str) -> Result<Vec<Book>, OperationError> {
        queries::search_books(&self.conn, keyword)
    }

    pub fn report(&self, group_by: GroupBy) -> Result<Vec<GroupCount>, OperationError> {
        queries::group_counts(&self.conn, group_by)
    }

    pub fn count(&self) -> Result<i64, OperationError> {
        queries::count_books(&self.conn)
    }
}

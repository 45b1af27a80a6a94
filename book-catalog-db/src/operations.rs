//! Write path: inserting books and the duplicate guard in front of it.

use book_catalog_core::{Book, NewBook, ValidationError};
use rusqlite::{Connection, params};
use thiserror::Error;

use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Duplicate of book #{existing_id} (same title, author and year)")]
    Duplicate { existing_id: i64 },
}

/// Insert a book unconditionally. Returns the assigned id.
pub fn insert_book(conn: &Connection, book: &NewBook) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO books (title, author, genre, year) VALUES (?1, ?2, ?3, ?4)",
        params![book.title(), book.author(), book.genre(), book.year()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Find an existing book with the same title, author (both case-insensitive)
/// and year.
pub fn find_duplicate(conn: &Connection, book: &NewBook) -> Result<Option<i64>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id FROM books
         WHERE unicode_lower(title) = unicode_lower(?1)
           AND unicode_lower(author) = unicode_lower(?2)
           AND year = ?3
         ORDER BY id LIMIT 1",
    )?;
    let result = stmt.query_row(params![book.title(), book.author(), book.year()], |row| {
        row.get::<_, i64>(0)
    });
    match result {
        Ok(id) => Ok(Some(id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Add a book unless an equivalent one already exists.
///
/// Check-then-insert: correct for a single process, not against concurrent
/// writers to the same file.
pub fn add_book(conn: &Connection, book: NewBook) -> Result<Book, OperationError> {
    if let Some(existing_id) = find_duplicate(conn, &book)? {
        log::debug!("Rejected duplicate of book #{existing_id}");
        return Err(OperationError::Duplicate { existing_id });
    }

    let id = insert_book(conn, &book)?;
    log::debug!("Inserted book #{id}");
    Ok(book.into_book(id))
}

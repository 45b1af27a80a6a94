//! Read queries for the catalog database.

use book_catalog_core::{Book, GroupBy, GroupCount, ValidationError};
use rusqlite::{Connection, params};

use crate::operations::OperationError;

/// All books, alphabetically by title (case-insensitive), ties by id.
pub fn list_books(conn: &Connection) -> Result<Vec<Book>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, author, genre, year
         FROM books ORDER BY unicode_lower(title), id",
    )?;
    let rows = stmt.query_map([], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// All books in insertion order. Used by exports.
pub fn books_by_id(conn: &Connection) -> Result<Vec<Book>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, author, genre, year
         FROM books ORDER BY id",
    )?;
    let rows = stmt.query_map([], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Books whose title, author or genre contains `keyword`, ignoring case.
///
/// The keyword is matched literally with `instr`, so `%` and `_` carry no
/// wildcard meaning. Ordered like [`list_books`].
pub fn search_books(conn: &Connection, keyword: &str) -> Result<Vec<Book>, OperationError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(ValidationError::EmptyKeyword.into());
    }

    let mut stmt = conn.prepare(
        "SELECT id, title, author, genre, year
         FROM books
         WHERE instr(unicode_lower(title), unicode_lower(?1)) > 0
            OR instr(unicode_lower(author), unicode_lower(?1)) > 0
            OR instr(unicode_lower(genre), unicode_lower(?1)) > 0
         ORDER BY unicode_lower(title), id",
    )?;
    let rows = stmt.query_map(params![keyword], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Record counts per distinct value of the grouping column.
///
/// Ordered by count descending, then by value ascending so equal counts
/// always come out in the same order.
pub fn group_counts(conn: &Connection, group_by: GroupBy) -> Result<Vec<GroupCount>, OperationError> {
    let column = group_by.column();
    let mut stmt = conn.prepare(&format!(
        "SELECT {column}, COUNT(*) AS cnt
         FROM books GROUP BY {column}
         ORDER BY cnt DESC, {column} ASC"
    ))?;
    let rows = stmt.query_map([], |row| {
        Ok(GroupCount {
            value: row.get(0)?,
            count: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Total number of stored books.
pub fn count_books(conn: &Connection) -> Result<i64, OperationError> {
    let count = conn.query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))?;
    Ok(count)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        genre: row.get(3)?,
        year: row.get(4)?,
    })
}

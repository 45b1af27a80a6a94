//! SQLite schema creation.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File name of the catalog database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "books.db";

/// SQL function that lowercases with full Unicode case mapping.
///
/// SQLite's built-in `lower()` only folds ASCII letters.
pub const UNICODE_LOWER: &str = "unicode_lower";

/// Register the catalog's SQL functions on a connection.
///
/// Must run before the schema is created or queried: the indexes and the
/// search/duplicate queries call [`UNICODE_LOWER`].
pub fn register_functions(conn: &Connection) -> Result<(), SchemaError> {
    conn.create_scalar_function(
        UNICODE_LOWER,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|s| s.to_lowercase()))
        },
    )?;
    Ok(())
}

/// Create the `books` table and its indexes if they don't exist.
///
/// This is idempotent — safe to call on every start.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a catalog database at the given path.
///
/// Missing parent directories are created first.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SchemaError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let conn = Connection::open(path)?;
    register_functions(&conn)?;
    create_schema(&conn)?;
    log::debug!("Opened catalog database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    register_functions(&conn)?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
-- AUTOINCREMENT keeps ids from ever being reused
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    genre TEXT NOT NULL,
    year INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_books_title ON books(unicode_lower(title));
CREATE INDEX IF NOT EXISTS idx_books_author ON books(unicode_lower(author));
CREATE INDEX IF NOT EXISTS idx_books_genre ON books(unicode_lower(genre));
CREATE INDEX IF NOT EXISTS idx_books_year ON books(year);
"#;

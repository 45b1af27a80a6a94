//! SQLite persistence layer for the book catalog.
//!
//! Provides schema bootstrap, the insert path with its duplicate guard,
//! and the read queries behind list, search, report and export. The
//! [`Catalog`] type owns a single connection for the life of the process.

pub mod catalog;
pub mod operations;
pub mod queries;
pub mod schema;

pub use catalog::Catalog;
pub use operations::{OperationError, add_book, find_duplicate, insert_book};
pub use queries::{books_by_id, count_books, group_counts, list_books, search_books};
pub use schema::{
    DATABASE_FILE_NAME, SchemaError, UNICODE_LOWER, open_database, open_memory, register_functions,
};

//! Domain types for the book catalog.
//!
//! Everything here is pure data and validation; persistence lives in
//! `book-catalog-db` and file output in `book-catalog-lib`.

pub mod book;
pub mod error;
pub mod format;
pub mod report;

pub use book::{Book, NewBook, parse_year};
pub use error::ValidationError;
pub use format::ExportFormat;
pub use report::{GroupBy, GroupCount};

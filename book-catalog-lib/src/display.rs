//! Plain-text rendering of records and report rows.
//!
//! Writers take any `io::Write` so the CLI can print to stdout and tests
//! can capture into a buffer.

use std::io::{self, Write};

use book_catalog_core::{Book, GroupCount};

/// Printed by list when the catalog is empty.
pub const NO_BOOKS: &str = "(no books yet)";

/// Printed by search when nothing matches.
pub const NO_MATCHES: &str = "(no matches)";

/// Printed by report when there is nothing to group.
pub const NO_DATA: &str = "(no data yet)";

/// One line per book, or `empty_message` if there are none.
pub fn write_books<W: Write>(out: &mut W, books: &[Book], empty_message: &str) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "{empty_message}");
    }
    for book in books {
        writeln!(out, "{book}")?;
    }
    Ok(())
}

/// One `value: count` line per group, or [`NO_DATA`].
pub fn write_report<W: Write>(out: &mut W, rows: &[GroupCount]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "{NO_DATA}");
    }
    for row in rows {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

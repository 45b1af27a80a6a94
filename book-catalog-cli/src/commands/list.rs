use std::io::Write;

use book_catalog_lib::display::{NO_BOOKS, write_books};

use crate::CliError;
use crate::commands::CatalogContext;

pub(crate) fn run_list<W: Write>(ctx: &CatalogContext, out: &mut W) -> Result<(), CliError> {
    let books = ctx
        .catalog
        .list_books()
        .map_err(|e| CliError::database(format!("Failed to list books: {}", e)))?;
    log::debug!("Listing {} books", books.len());
    write_books(out, &books, NO_BOOKS)?;
    Ok(())
}

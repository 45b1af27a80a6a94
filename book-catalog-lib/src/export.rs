//! CSV and JSON dumps of the whole catalog, plus readers for them.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use book_catalog_core::{Book, ExportFormat};
use book_catalog_db::Catalog;

use crate::error::ExportError;
use crate::paths::export_path;

/// Outcome of [`export_catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub count: usize,
    pub path: PathBuf,
}

/// Write every book, ordered by id, to the format's file in `data_dir`.
///
/// An existing export at that path is overwritten.
pub fn export_catalog(
    catalog: &Catalog,
    format: ExportFormat,
    data_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    let books = catalog.books_by_id()?;
    std::fs::create_dir_all(data_dir).map_err(|e| ExportError::io(data_dir, e))?;

    let path = export_path(data_dir, format);
    let file = File::create(&path).map_err(|e| ExportError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Csv => write_csv(&mut writer, &books)?,
        ExportFormat::Json => write_json(&mut writer, &books)?,
    }
    writer.flush().map_err(|e| ExportError::io(&path, e))?;

    log::debug!("Exported {} rows as {} to {}", books.len(), format, path.display());
    Ok(ExportSummary {
        count: books.len(),
        path,
    })
}

/// CSV with an `id,title,author,genre,year` header row.
///
/// The header is written even when there are no books.
pub fn write_csv<W: Write>(out: W, books: &[Book]) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(["id", "title", "author", "genre", "year"])?;
    for book in books {
        writer.serialize(book)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Pretty-printed JSON array of book objects.
pub fn write_json<W: Write>(mut out: W, books: &[Book]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, books)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    Ok(())
}

/// Parse a CSV export back into books.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<Book>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);
    reader
        .deserialize()
        .collect::<Result<Vec<Book>, _>>()
        .map_err(Into::into)
}

/// Parse a JSON export back into books.
pub fn read_json<R: Read>(input: R) -> Result<Vec<Book>, ExportError> {
    Ok(serde_json::from_reader(input)?)
}

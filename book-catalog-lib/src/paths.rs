//! Location of the catalog's files on disk.

use std::path::{Path, PathBuf};

use book_catalog_core::ExportFormat;

use crate::error::PathError;

/// Name of the directory holding the database and exports.
pub const DATA_DIR_NAME: &str = "data";

/// The `data` directory next to the running executable.
pub fn default_data_dir() -> Result<PathBuf, PathError> {
    let exe = std::env::current_exe()?;
    data_dir_for(&exe)
}

/// The `data` directory next to `exe`.
pub fn data_dir_for(exe: &Path) -> Result<PathBuf, PathError> {
    exe.parent()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .ok_or_else(|| PathError::NoParent(exe.to_path_buf()))
}

/// Where an export of the given format is written.
pub fn export_path(data_dir: &Path, format: ExportFormat) -> PathBuf {
    data_dir.join(format.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_sits_next_to_executable() {
        let exe = Path::new("/opt/books/bin/book-catalog");
        assert_eq!(
            data_dir_for(exe).unwrap(),
            PathBuf::from("/opt/books/bin/data")
        );
    }

    #[test]
    fn root_has_no_parent() {
        assert!(matches!(
            data_dir_for(Path::new("/")),
            Err(PathError::NoParent(_))
        ));
    }

    #[test]
    fn export_paths_share_the_data_dir() {
        let dir = Path::new("data");
        assert_eq!(export_path(dir, ExportFormat::Csv), dir.join("books.csv"));
        assert_eq!(export_path(dir, ExportFormat::Json), dir.join("books.json"));
    }
}

use std::path::PathBuf;

/// Errors that can occur while exporting or re-reading a catalog dump.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Operation(#[from] book_catalog_db::OperationError),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors resolving the data directory.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("Could not locate the running executable: {0}")]
    CurrentExe(#[from] std::io::Error),

    #[error("Executable path {} has no parent directory", .0.display())]
    NoParent(PathBuf),
}

//! Shared plumbing between the catalog store and its front end:
//! where the data lives, how records are rendered, and how they are
//! exported.

pub mod display;
pub mod error;
pub mod export;
pub mod paths;

pub use error::{ExportError, PathError};
pub use export::{ExportSummary, export_catalog, read_csv, read_json, write_csv, write_json};
pub use paths::{DATA_DIR_NAME, default_data_dir, export_path};

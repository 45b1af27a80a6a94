pub(crate) mod add;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod report;
pub(crate) mod search;

use std::path::PathBuf;

use book_catalog_db::Catalog;

/// Everything a command needs: the open store and where its files live.
pub(crate) struct CatalogContext {
    pub catalog: Catalog,
    pub data_dir: PathBuf,
}

impl CatalogContext {
    pub(crate) fn new(catalog: Catalog, data_dir: PathBuf) -> Self {
        Self { catalog, data_dir }
    }
}

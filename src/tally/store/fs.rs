use super::{codec, CatalogStore};
use crate::catalog::Catalog;
use crate::error::{Result, TallyError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed catalog store.
///
/// The whole data file is rewritten on every save; there is no journal and
/// no temp-file rename, matching the legacy format's guarantees.
pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TallyError::Io)?;
            }
        }
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Catalog> {
        // No file yet is the first-run case, not an error.
        if !self.data_file.exists() {
            return Ok(Catalog::new());
        }
        let text = fs::read_to_string(&self.data_file).map_err(TallyError::Io)?;
        Ok(codec::decode_catalog(&text))
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.ensure_parent_dir()?;
        fs::write(&self.data_file, codec::encode_catalog(catalog)).map_err(TallyError::Io)
    }
}

//! Page store
//!
//! Fetched content is written to one file per task, named deterministically
//! from the task's sequence identifier.

use crate::storage::{StorageError, StorageResult};
use std::path::{Path, PathBuf};

/// Directory of stored page files
#[derive(Debug, Clone)]
pub struct PageStore {
    dir: PathBuf,
}

impl PageStore {
    /// Opens a page store, creating the directory if it does not exist
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the page files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deterministic file path for a sequence identifier
    ///
    /// Identifiers are zero-padded to three digits; wider identifiers simply
    /// widen the name (`page_1234.html`) rather than truncating or colliding.
    pub fn page_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("page_{:03}.html", id))
    }

    /// Writes page content for the given sequence identifier
    ///
    /// Overwrites silently if the file already exists; under correct
    /// orchestration that only happens when a previous run crashed between
    /// writing the file and appending the ledger entry.
    pub fn save(&self, id: u64, content: &str) -> StorageResult<PathBuf> {
        let path = self.page_path(id);
        std::fs::write(&path, content).map_err(|source| StorageError::PageWrite {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

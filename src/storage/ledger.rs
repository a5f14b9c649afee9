//! Append-only progress ledger
//!
//! The ledger is a plain-text file with one `"<id> <url>"` line per completed
//! task. It is read once at startup to recover the set of completed sequence
//! identifiers and appended to after each success. The harvester never
//! rewrites or deletes entries.

use crate::storage::{StorageError, StorageResult};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Durable record of completed fetch tasks
#[derive(Debug, Clone)]
pub struct ProgressLedger {
    path: PathBuf,
}

impl ProgressLedger {
    /// Creates a ledger handle for the given path
    ///
    /// The file itself is created lazily on first append; a missing file
    /// simply means nothing has been completed yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the set of completed sequence identifiers
    ///
    /// Every line whose leading whitespace-separated token parses as a `u64`
    /// contributes one identifier. Malformed lines are skipped silently so a
    /// stray line never blocks a resume.
    ///
    /// # Returns
    ///
    /// * `Ok(HashSet<u64>)` - Completed identifiers (empty if the file is absent)
    /// * `Err(StorageError)` - The file exists but could not be read
    pub fn load_completed(&self) -> StorageResult<HashSet<u64>> {
        let mut completed = HashSet::new();

        if !self.path.exists() {
            return Ok(completed);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            StorageError::LedgerRead {
                path: self.path.clone(),
                source,
            }
        })?;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(token) = line.split_whitespace().next() {
                if let Ok(id) = token.parse::<u64>() {
                    completed.insert(id);
                }
            }
        }

        tracing::info!(
            "Found {} previously completed pages in {}",
            completed.len(),
            self.path.display()
        );

        Ok(completed)
    }

    /// Loads all well-formed `(id, url)` entries in file order
    ///
    /// Used by the stats mode; the harvester itself only needs
    /// [`load_completed`](Self::load_completed).
    pub fn entries(&self) -> StorageResult<Vec<(u64, String)>> {
        let mut entries = Vec::new();

        if !self.path.exists() {
            return Ok(entries);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            StorageError::LedgerRead {
                path: self.path.clone(),
                source,
            }
        })?;

        for line in content.lines() {
            let line = line.trim();
            if let Some((token, url)) = line.split_once(' ') {
                if let Ok(id) = token.parse::<u64>() {
                    entries.push((id, url.trim().to_string()));
                }
            }
        }

        Ok(entries)
    }

    /// Appends one `(id, url)` entry and makes it durable before returning
    ///
    /// The caller must only append identifiers that are not already in the
    /// completed set; this layer does not deduplicate.
    pub fn append(&self, id: u64, url: &str) -> StorageResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StorageError::LedgerAppend {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{} {}", id, url).map_err(|source| StorageError::LedgerAppend {
            path: self.path.clone(),
            source,
        })?;

        // The next process start must observe this entry even if we crash
        // right after returning.
        file.sync_data().map_err(|source| StorageError::LedgerAppend {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}

//! URL source loading
//!
//! This module reads the ordered list of target URLs from a plain-text file.
//! The position of a URL in this list is its sequence identifier for the
//! whole lifetime of the harvest, so the file must not be reordered or edited
//! between runs if resume is to stay meaningful.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the URL list
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("URL list file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read URL list: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for URL source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Loads the ordered URL list from a plain-text file
///
/// Each non-blank line is one fetch target. Lines whose first non-whitespace
/// character is `#` are comments. Surviving lines are trimmed of surrounding
/// whitespace. Order is preserved and duplicates are kept: the 1-based
/// position of a line in the returned list is the task's sequence identifier.
///
/// # Arguments
///
/// * `path` - Path to the URL list file
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The ordered list of URLs (possibly empty)
/// * `Err(SourceError::NotFound)` - The file does not exist (caller decides
///   whether that is fatal)
/// * `Err(SourceError::Io)` - The file exists but could not be read
pub fn load_url_list(path: &Path) -> SourceResult<Vec<String>> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let urls: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    tracing::info!("Loaded {} URLs from {}", urls.len(), path.display());

    Ok(urls)
}

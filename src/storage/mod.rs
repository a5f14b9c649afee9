//! Storage module for persisting harvest results
//!
//! This module owns the two on-disk artifacts of a harvest:
//! - The progress ledger, an append-only text file recording which sequence
//!   identifiers have been fully completed
//! - The page store, a directory of files holding raw fetched content
//!
//! The consistency contract between the two: a page file is written strictly
//! before its ledger entry is appended, so a ledger entry always points at an
//! existing, complete file.

mod ledger;
mod pages;

pub use ledger::ProgressLedger;
pub use pages::PageStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read ledger {path}: {source}")]
    LedgerRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to append to ledger {path}: {source}")]
    LedgerAppend {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write page file {path}: {source}")]
    PageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create pages directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

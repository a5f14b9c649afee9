//! Output module for run statistics and progress reporting
//!
//! This module handles:
//! - Accumulating per-run counters
//! - The reporter seam the coordinator emits events through
//! - Printing the human-readable end-of-run summary

mod report;
pub mod stats;

pub use report::{HarvestEvent, Reporter, TracingReporter};
pub use stats::{print_summary, RunStats};

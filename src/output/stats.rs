//! Run statistics
//!
//! Counters for a single harvest run. Scoped to the process; nothing here is
//! persisted.

use crate::state::TaskState;
use chrono::{DateTime, Local};
use std::path::Path;

/// Counters accumulated over one harvest run
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Number of URLs in the configured list
    pub total: usize,

    /// Tasks for which a fetch was actually attempted
    pub attempted: u64,

    /// Tasks that were fetched, stored, and recorded
    pub succeeded: u64,

    /// Tasks skipped because their identifier was already in the ledger
    pub skipped: u64,

    /// Tasks whose fetch or storage failed
    pub failed: u64,

    /// Wall-clock time the run started
    pub started_at: DateTime<Local>,
}

impl RunStats {
    /// Creates zeroed counters for a list of `total` URLs
    pub fn new(total: usize) -> Self {
        Self {
            total,
            attempted: 0,
            succeeded: 0,
            skipped: 0,
            failed: 0,
            started_at: Local::now(),
        }
    }

    /// Records one terminal task outcome
    ///
    /// Non-terminal states are ignored; `Succeeded` and `Failed` also count
    /// as attempts.
    pub fn record(&mut self, outcome: TaskState) {
        match outcome {
            TaskState::Skipped => self.skipped += 1,
            TaskState::Succeeded => {
                self.attempted += 1;
                self.succeeded += 1;
            }
            TaskState::Failed => {
                self.attempted += 1;
                self.failed += 1;
            }
            TaskState::Pending | TaskState::Fetching => {}
        }
    }

    /// Number of tasks that reached a terminal state
    ///
    /// Equals `total` after a complete run.
    pub fn accounted(&self) -> u64 {
        self.succeeded + self.skipped + self.failed
    }
}

/// Prints the end-of-run summary to stdout
///
/// # Arguments
///
/// * `stats` - The statistics to display
/// * `pages_dir` - Directory the page files were written to
/// * `ledger_path` - Path of the progress ledger
pub fn print_summary(stats: &RunStats, pages_dir: &Path, ledger_path: &Path) {
    println!("=== Harvest Summary ===\n");

    println!("Started: {}", stats.started_at.format("%Y-%m-%d %H:%M:%S"));
    println!();

    println!("Tasks:");
    println!("  Total URLs: {}", stats.total);
    println!("  Fetched:    {}", stats.succeeded);
    println!("  Skipped:    {}", stats.skipped);
    println!("  Failed:     {}", stats.failed);
    println!();

    let completion = if stats.total > 0 {
        ((stats.succeeded + stats.skipped) as f64 / stats.total as f64) * 100.0
    } else {
        0.0
    };
    println!(
        "Completion: {:.1}% ({} / {} pages on disk)",
        completion,
        stats.succeeded + stats.skipped,
        stats.total
    );
    println!();

    println!("Pages:  {}/", pages_dir.display());
    println!("Ledger: {}", ledger_path.display());
}

//! Reporter seam for per-task events
//!
//! The coordinator does not log directly; it emits structured events through
//! a [`Reporter`] injected at construction time. The default implementation
//! forwards to `tracing`, but tests (or an embedding application) can supply
//! their own receiver.

use crate::harvest::TaskError;
use crate::output::RunStats;
use std::path::Path;

/// A structured event emitted by the harvester as a run progresses
#[derive(Debug)]
pub enum HarvestEvent<'a> {
    /// The run is starting with `total` URLs in the list
    RunStarted { total: usize },

    /// Task `seq` was already in the ledger and will not be fetched
    TaskSkipped {
        seq: u64,
        total: usize,
        url: &'a str,
    },

    /// Task `seq` is about to be fetched
    TaskFetching {
        seq: u64,
        total: usize,
        url: &'a str,
    },

    /// Task `seq` was fetched, stored at `path`, and recorded in the ledger
    TaskSucceeded {
        seq: u64,
        total: usize,
        url: &'a str,
        path: &'a Path,
        bytes: usize,
    },

    /// Task `seq` failed; it stays unrecorded for a later run
    TaskFailed {
        seq: u64,
        total: usize,
        url: &'a str,
        error: &'a TaskError,
    },

    /// Every task reached a terminal state
    RunFinished { stats: &'a RunStats },
}

/// Receiver for harvest events
pub trait Reporter {
    /// Called once per event, in run order
    fn report(&self, event: HarvestEvent<'_>);
}

/// Default reporter that forwards events to `tracing`
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: HarvestEvent<'_>) {
        match event {
            HarvestEvent::RunStarted { total } => {
                tracing::info!("Starting harvest of {} URLs", total);
            }
            HarvestEvent::TaskSkipped { seq, total, url } => {
                tracing::info!("[{}/{}] Skipping (already stored): {}", seq, total, url);
            }
            HarvestEvent::TaskFetching { seq, total, url } => {
                tracing::info!("[{}/{}] Fetching: {}", seq, total, url);
            }
            HarvestEvent::TaskSucceeded {
                seq,
                total,
                url: _,
                path,
                bytes,
            } => {
                tracing::info!(
                    "[{}/{}] Saved {} ({} bytes)",
                    seq,
                    total,
                    path.display(),
                    bytes
                );
            }
            HarvestEvent::TaskFailed {
                seq,
                total,
                url,
                error,
            } => {
                tracing::warn!("[{}/{}] Failed {}: {}", seq, total, url, error);
            }
            HarvestEvent::RunFinished { stats } => {
                tracing::info!(
                    "Harvest finished: {} fetched, {} skipped, {} failed",
                    stats.succeeded,
                    stats.skipped,
                    stats.failed
                );
            }
        }
    }
}

//! Harvest module for resumable page fetching
//!
//! This module contains the core harvest logic, including:
//! - HTTP fetching with outcome classification
//! - Reconciling the URL list against recorded progress
//! - Store-then-ledger commit ordering per task

mod coordinator;
mod fetcher;

pub use coordinator::{Harvester, TaskError};
pub use fetcher::{build_http_client, fetch_page, FetchError, FetchedPage};

use crate::config::Config;
use crate::output::{RunStats, TracingReporter};
use crate::HarvestError;

/// Runs a complete harvest operation
///
/// This is the main entry point for a harvest. It will:
/// 1. Open the page store and progress ledger
/// 2. Load the URL list and the completed-identifier set
/// 3. Fetch every not-yet-completed URL in list order
/// 4. Return the final run statistics
///
/// Task events are logged through the default tracing reporter; use
/// [`Harvester::new`] directly to inject a different one.
///
/// # Arguments
///
/// * `config` - The harvester configuration
///
/// # Returns
///
/// * `Ok(RunStats)` - Harvest completed (possibly with failed tasks)
/// * `Err(HarvestError)` - Harvest could not start
pub async fn harvest(config: Config) -> Result<RunStats, HarvestError> {
    let mut harvester = Harvester::new(config, TracingReporter)?;
    harvester.run().await
}

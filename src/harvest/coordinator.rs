//! Harvest coordinator - main orchestration logic
//!
//! This module contains the main loop that reconciles the configured URL list
//! against previously recorded progress and drives each remaining task
//! through fetch, store, and ledger append.
//!
//! Ordering invariant: the page file is written strictly before the ledger
//! entry is appended, so an interruption never leaves a ledger entry pointing
//! at a missing file. The reverse gap (a page file with no ledger entry) is
//! possible after a crash and is resolved by re-fetching on the next run.

use crate::config::{compute_file_hash, Config};
use crate::harvest::{build_http_client, fetch_page, FetchError};
use crate::output::{HarvestEvent, Reporter, RunStats};
use crate::sources::{load_url_list, SourceError};
use crate::state::TaskState;
use crate::storage::{PageStore, ProgressLedger, StorageError};
use crate::HarvestError;
use reqwest::Client;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a single task, either at the network or the storage layer
///
/// Both layers fail only the task, never the run; they are distinguished
/// because a storage failure must prevent the ledger append for that task.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Storage(#[from] StorageError),
}

/// Main harvester structure
///
/// Owns everything a run needs: configuration, the HTTP client, the progress
/// ledger, the page store, and the injected reporter that receives per-task
/// events.
pub struct Harvester<R: Reporter> {
    config: Config,
    client: Client,
    ledger: ProgressLedger,
    store: PageStore,
    reporter: R,
}

impl<R: Reporter> Harvester<R> {
    /// Creates a new harvester instance
    ///
    /// Builds the HTTP client and opens the page store, creating the output
    /// directory if needed. The URL list is read later, in [`run`](Self::run).
    ///
    /// # Arguments
    ///
    /// * `config` - The harvester configuration
    /// * `reporter` - Receiver for structured per-task events
    pub fn new(config: Config, reporter: R) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.fetcher)?;
        let store = PageStore::open(&config.output.pages_dir)?;
        let ledger = ProgressLedger::new(&config.output.ledger_path);

        Ok(Self {
            config,
            client,
            ledger,
            store,
            reporter,
        })
    }

    /// Runs the harvest to completion
    ///
    /// 1. Loads the URL list; an empty or missing list aborts the run
    /// 2. Loads the completed-identifier set from the ledger
    /// 3. Walks the list in order: skip completed identifiers, fetch the
    ///    rest, store then append on success
    /// 4. Pauses for the politeness delay between consecutive tasks
    ///
    /// Per-task failures are counted and reported but never abort the run.
    ///
    /// # Returns
    ///
    /// * `Ok(RunStats)` - Final counters for the run
    /// * `Err(HarvestError)` - The run could not start
    pub async fn run(&mut self) -> Result<RunStats, HarvestError> {
        let list_path = Path::new(&self.config.sources.url_list_path).to_path_buf();

        let urls = match load_url_list(&list_path) {
            Ok(urls) => urls,
            Err(SourceError::NotFound(path)) => {
                tracing::error!("URL list file not found: {}", path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        if urls.is_empty() {
            return Err(HarvestError::EmptySourceList);
        }

        // Sequence identifiers are positional, so an edited list silently
        // shifts them. Log the list hash so a changed list is at least
        // visible across runs.
        if let Ok(hash) = compute_file_hash(&list_path) {
            tracing::info!("URL list hash: {}", hash);
        }

        let completed = self.ledger.load_completed()?;

        let total = urls.len();
        let mut stats = RunStats::new(total);
        self.reporter.report(HarvestEvent::RunStarted { total });

        for (pos, url) in urls.iter().enumerate() {
            let url = url.as_str();
            let seq = (pos + 1) as u64;

            let outcome = if completed.contains(&seq) {
                self.reporter.report(HarvestEvent::TaskSkipped {
                    seq,
                    total,
                    url,
                });
                TaskState::Skipped
            } else {
                self.reporter.report(HarvestEvent::TaskFetching {
                    seq,
                    total,
                    url,
                });

                match self.process_task(seq, url).await {
                    Ok((path, bytes)) => {
                        self.reporter.report(HarvestEvent::TaskSucceeded {
                            seq,
                            total,
                            url,
                            path: &path,
                            bytes,
                        });
                        TaskState::Succeeded
                    }
                    Err(error) => {
                        self.reporter.report(HarvestEvent::TaskFailed {
                            seq,
                            total,
                            url,
                            error: &error,
                        });
                        TaskState::Failed
                    }
                }
            };

            stats.record(outcome);

            // Politeness delay after each actual request, not after skips
            // and not after the final task
            if outcome != TaskState::Skipped && pos + 1 < total {
                tokio::time::sleep(self.config.fetcher.request_delay()).await;
            }
        }

        self.reporter
            .report(HarvestEvent::RunFinished { stats: &stats });

        Ok(stats)
    }

    /// Processes a single not-yet-completed task
    ///
    /// On fetch success the page file is written first and the ledger entry
    /// appended second. A storage failure at either step fails the task and
    /// leaves the ledger without an entry for it.
    async fn process_task(&self, seq: u64, url: &str) -> Result<(PathBuf, usize), TaskError> {
        let page = fetch_page(&self.client, url).await?;

        let path = self.store.save(seq, &page.body)?;
        self.ledger.append(seq, url)?;

        Ok((path, page.body.len()))
    }
}

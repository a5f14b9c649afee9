//! Page-Harvest main entry point
//!
//! This is the command-line interface for the Page-Harvest resumable page
//! fetcher.

use clap::Parser;
use page_harvest::config::{load_config_with_hash, Config};
use page_harvest::harvest::harvest;
use page_harvest::output::print_summary;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Page-Harvest: a resumable web page harvester
///
/// Page-Harvest downloads the pages named in a plain-text URL list into a
/// local directory, recording every completed download in an append-only
/// ledger. Re-running it picks up where the previous run stopped.
#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A resumable web page harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be fetched without fetching
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show ledger progress against the configured URL list and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration (or fall back to built-in defaults)
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config)?;
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_harvest(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_harvest=info,warn"),
            1 => EnvFilter::new("page_harvest=debug,info"),
            2 => EnvFilter::new("page_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be fetched
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    use page_harvest::sources::{load_url_list, SourceError};
    use page_harvest::storage::ProgressLedger;

    println!("=== Page-Harvest Dry Run ===\n");

    println!("Fetcher Configuration:");
    println!("  User agent: {}", config.fetcher.user_agent);
    println!("  Timeout: {}s", config.fetcher.request_timeout_secs);
    println!("  Delay between requests: {}ms", config.fetcher.request_delay_ms);

    println!("\nOutput:");
    println!("  Pages directory: {}", config.output.pages_dir);
    println!("  Ledger: {}", config.output.ledger_path);

    println!("\nURL list: {}", config.sources.url_list_path);

    let urls = match load_url_list(Path::new(&config.sources.url_list_path)) {
        Ok(urls) => urls,
        Err(SourceError::NotFound(path)) => {
            println!("\n✗ URL list file not found: {}", path.display());
            println!("✗ A harvest run would abort");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if urls.is_empty() {
        println!("\n✗ URL list is empty, a harvest run would abort");
        return Ok(());
    }

    let completed = ProgressLedger::new(&config.output.ledger_path).load_completed()?;

    let mut invalid = 0;
    for (pos, target) in urls.iter().enumerate() {
        let seq = (pos + 1) as u64;
        let marker = if completed.contains(&seq) {
            "done"
        } else if url::Url::parse(target).is_err() {
            invalid += 1;
            "INVALID"
        } else {
            "todo"
        };
        println!("  [{:>3}] {:7} {}", seq, marker, target);
    }

    let done = completed
        .iter()
        .filter(|id| **id >= 1 && **id <= urls.len() as u64)
        .count();

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch {} of {} URLs ({} already completed)",
        urls.len() - done,
        urls.len(),
        done
    );
    if invalid > 0 {
        println!(
            "! {} entries do not parse as URLs and will fail when attempted",
            invalid
        );
    }

    Ok(())
}

/// Handles the --stats mode: shows ledger progress against the URL list
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    use page_harvest::sources::{load_url_list, SourceError};
    use page_harvest::storage::ProgressLedger;

    println!("=== Harvest Progress ===\n");
    println!("Ledger: {}", config.output.ledger_path);
    println!("Pages:  {}/", config.output.pages_dir);
    println!();

    let ledger = ProgressLedger::new(&config.output.ledger_path);
    let entries = ledger.entries()?;
    let completed = ledger.load_completed()?;

    let total = match load_url_list(Path::new(&config.sources.url_list_path)) {
        Ok(urls) => Some(urls.len()),
        Err(SourceError::NotFound(_)) => None,
        Err(e) => return Err(e.into()),
    };

    println!("Ledger entries: {}", entries.len());
    println!("Completed identifiers: {}", completed.len());

    match total {
        Some(total) => {
            let done = completed
                .iter()
                .filter(|id| **id >= 1 && **id <= total as u64)
                .count();
            println!("Configured URLs: {}", total);
            println!("Remaining: {}", total - done);
        }
        None => {
            println!(
                "Configured URLs: unknown ({} not found)",
                config.sources.url_list_path
            );
        }
    }

    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(config: Config) -> anyhow::Result<()> {
    let pages_dir = PathBuf::from(&config.output.pages_dir);
    let ledger_path = PathBuf::from(&config.output.ledger_path);

    match harvest(config).await {
        Ok(stats) => {
            print_summary(&stats, &pages_dir, &ledger_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest aborted: {}", e);
            Err(e.into())
        }
    }
}

//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full fetch-store-ledger cycle end-to-end.

use page_harvest::config::{Config, FetcherConfig, OutputConfig, SourcesConfig};
use page_harvest::harvest::Harvester;
use page_harvest::output::{RunStats, TracingReporter};
use page_harvest::storage::{PageStore, ProgressLedger};
use page_harvest::HarvestError;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with all artifacts inside `dir`
fn create_test_config(dir: &TempDir) -> Config {
    Config {
        fetcher: FetcherConfig {
            user_agent: "TestHarvester/1.0".to_string(),
            request_timeout_secs: 2,
            request_delay_ms: 0, // No politeness pause in tests
        },
        sources: SourcesConfig {
            url_list_path: dir
                .path()
                .join("urls_list.txt")
                .to_string_lossy()
                .into_owned(),
        },
        output: OutputConfig {
            pages_dir: dir.path().join("pages").to_string_lossy().into_owned(),
            ledger_path: dir.path().join("index.txt").to_string_lossy().into_owned(),
        },
    }
}

/// Writes the URL list file for a config
fn write_url_list(config: &Config, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&config.sources.url_list_path, content).unwrap();
}

/// Runs a harvest with the default reporter
async fn run_harvest(config: Config) -> Result<RunStats, HarvestError> {
    let mut harvester = Harvester::new(config, TracingReporter).unwrap();
    harvester.run().await
}

/// Mounts a plain HTML page at `route`
async fn mount_html(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html"))
        .mount(server)
        .await;
}

/// Asserts the store-before-ledger invariant: every ledger entry points at
/// an existing page file
fn assert_ledger_consistent(config: &Config) {
    let ledger = ProgressLedger::new(&config.output.ledger_path);
    let store = PageStore::open(&config.output.pages_dir).unwrap();
    for (id, url) in ledger.entries().unwrap() {
        assert!(
            store.page_path(id).is_file(),
            "ledger entry {} {} has no page file",
            id,
            url
        );
    }
}

#[tokio::test]
async fn test_full_run_fetches_every_url() {
    let server = MockServer::start().await;
    mount_html(&server, "/a", "<html>page a</html>").await;
    mount_html(&server, "/b", "<html>page b</html>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let url_a = format!("{}/a", server.uri());
    let url_b = format!("{}/b", server.uri());
    write_url_list(&config, &[&url_a, &url_b]);

    let stats = run_harvest(config.clone()).await.unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.succeeded, 2);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.accounted() as usize, stats.total);

    let store = PageStore::open(&config.output.pages_dir).unwrap();
    assert_eq!(
        std::fs::read_to_string(store.page_path(1)).unwrap(),
        "<html>page a</html>"
    );
    assert_eq!(
        std::fs::read_to_string(store.page_path(2)).unwrap(),
        "<html>page b</html>"
    );

    let ledger = ProgressLedger::new(&config.output.ledger_path);
    assert_eq!(ledger.entries().unwrap(), vec![(1, url_a), (2, url_b)]);
    assert_ledger_consistent(&config);
}

#[tokio::test]
async fn test_http_error_fails_task_but_not_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_html(&server, "/ok", "<html>ok</html>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let url_missing = format!("{}/missing", server.uri());
    let url_ok = format!("{}/ok", server.uri());
    write_url_list(&config, &[&url_missing, &url_ok]);

    let stats = run_harvest(config.clone()).await.unwrap();

    assert_eq!(stats.failed, 1);
    assert_eq!(stats.succeeded, 1);
    assert_eq!(stats.skipped, 0);

    // Only the second task is stored and recorded
    let store = PageStore::open(&config.output.pages_dir).unwrap();
    assert!(!store.page_path(1).exists());
    assert!(store.page_path(2).is_file());

    let ledger = ProgressLedger::new(&config.output.ledger_path);
    assert_eq!(ledger.entries().unwrap(), vec![(2, url_ok)]);
    assert_ledger_consistent(&config);
}

#[tokio::test]
async fn test_second_run_skips_completed_and_retries_failed() {
    let server = MockServer::start().await;
    mount_html(&server, "/a", "<html>a</html>").await;
    mount_html(&server, "/b", "<html>b</html>").await;
    // /flaky errors once, then recovers
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_html(&server, "/flaky", "<html>finally</html>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let urls = [
        format!("{}/a", server.uri()),
        format!("{}/b", server.uri()),
        format!("{}/flaky", server.uri()),
    ];
    write_url_list(&config, &[&urls[0], &urls[1], &urls[2]]);

    let first = run_harvest(config.clone()).await.unwrap();
    assert_eq!(first.succeeded, 2);
    assert_eq!(first.failed, 1);
    assert_eq!(first.skipped, 0);

    let second = run_harvest(config.clone()).await.unwrap();
    assert_eq!(second.skipped, 2);
    assert_eq!(second.succeeded, 1);
    assert_eq!(second.failed, 0);

    // The ledger must not contain duplicate entries for the first two tasks
    let content = std::fs::read_to_string(&config.output.ledger_path).unwrap();
    let ids: Vec<&str> = content
        .lines()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(ids.len(), 3);
    for id in ["1", "2", "3"] {
        assert_eq!(ids.iter().filter(|t| **t == id).count(), 1);
    }

    assert_eq!(
        std::fs::read_to_string(
            PageStore::open(&config.output.pages_dir)
                .unwrap()
                .page_path(3)
        )
        .unwrap(),
        "<html>finally</html>"
    );
    assert_ledger_consistent(&config);
}

#[tokio::test]
async fn test_non_html_content_type_fails_task() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{\"not\": \"html\"}")
                .insert_header("content-type", "application/json"),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let url = format!("{}/data", server.uri());
    write_url_list(&config, &[&url]);

    let stats = run_harvest(config.clone()).await.unwrap();

    assert_eq!(stats.failed, 1);
    assert_eq!(stats.succeeded, 0);
    let store = PageStore::open(&config.output.pages_dir).unwrap();
    assert!(!store.page_path(1).exists());
    assert!(ProgressLedger::new(&config.output.ledger_path)
        .entries()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_connection_failure_fails_task() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    // Nothing listens on port 9; the connection is refused immediately
    write_url_list(&config, &["http://127.0.0.1:9/"]);

    let stats = run_harvest(config.clone()).await.unwrap();

    assert_eq!(stats.failed, 1);
    assert_eq!(stats.succeeded, 0);
}

#[tokio::test]
async fn test_timeout_fails_task() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>slow</html>")
                .insert_header("content-type", "text/html")
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&dir);
    config.fetcher.request_timeout_secs = 1;
    let url = format!("{}/slow", server.uri());
    write_url_list(&config, &[&url]);

    let stats = run_harvest(config.clone()).await.unwrap();

    assert_eq!(stats.failed, 1);
    assert_eq!(stats.succeeded, 0);
}

#[tokio::test]
async fn test_blank_and_comment_lines_are_not_tasks() {
    let server = MockServer::start().await;
    mount_html(&server, "/a", "<html>a</html>").await;
    mount_html(&server, "/b", "<html>b</html>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let url_a = format!("{}/a", server.uri());
    let url_b = format!("{}/b", server.uri());
    write_url_list(&config, &[&url_a, "# comment", "", &url_b]);

    let stats = run_harvest(config.clone()).await.unwrap();

    // Comments and blanks do not consume sequence identifiers
    assert_eq!(stats.total, 2);
    assert_eq!(stats.succeeded, 2);

    let ledger = ProgressLedger::new(&config.output.ledger_path);
    assert_eq!(ledger.entries().unwrap(), vec![(1, url_a), (2, url_b)]);
}

#[tokio::test]
async fn test_malformed_ledger_line_does_not_block_resume() {
    let server = MockServer::start().await;
    mount_html(&server, "/a", "<html>a</html>").await;
    mount_html(&server, "/b", "<html>b</html>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let url_a = format!("{}/a", server.uri());
    let url_b = format!("{}/b", server.uri());
    write_url_list(&config, &[&url_a, &url_b]);

    // Pre-existing ledger: one garbage line, one valid completion
    std::fs::write(
        &config.output.ledger_path,
        format!("abc not-a-number\n1 {}\n", url_a),
    )
    .unwrap();

    let stats = run_harvest(config.clone()).await.unwrap();

    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.succeeded, 1);
    assert_eq!(stats.failed, 0);
}

#[tokio::test]
async fn test_empty_url_list_aborts_run() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    write_url_list(&config, &[]);

    let result = run_harvest(config.clone()).await;
    assert!(matches!(result, Err(HarvestError::EmptySourceList)));

    // Nothing was recorded
    assert!(!std::path::Path::new(&config.output.ledger_path).exists());
}

#[tokio::test]
async fn test_missing_url_list_aborts_run() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    // No URL list file written at all

    let result = run_harvest(config).await;
    assert!(matches!(result, Err(HarvestError::EmptySourceList)));
}

#[tokio::test]
async fn test_duplicate_urls_are_independent_tasks() {
    let server = MockServer::start().await;
    mount_html(&server, "/a", "<html>a</html>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let url_a = format!("{}/a", server.uri());
    write_url_list(&config, &[&url_a, &url_a]);

    let stats = run_harvest(config.clone()).await.unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.succeeded, 2);

    let store = PageStore::open(&config.output.pages_dir).unwrap();
    assert!(store.page_path(1).is_file());
    assert!(store.page_path(2).is_file());

    let ledger = ProgressLedger::new(&config.output.ledger_path);
    assert_eq!(
        ledger.entries().unwrap(),
        vec![(1, url_a.clone()), (2, url_a)]
    );
}

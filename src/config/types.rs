use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Page-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Fetcher behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// User agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Wall-clock timeout for a single fetch attempt (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Politeness delay between consecutive requests (milliseconds)
    #[serde(rename = "request-delay-ms", default = "default_delay_ms")]
    pub request_delay_ms: u64,
}

/// URL source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Path to the plain-text URL list, one URL per line
    #[serde(rename = "url-list-path", default = "default_url_list_path")]
    pub url_list_path: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where fetched pages are written
    #[serde(rename = "pages-dir", default = "default_pages_dir")]
    pub pages_dir: String,

    /// Path to the append-only progress ledger
    #[serde(rename = "ledger-path", default = "default_ledger_path")]
    pub ledger_path: String,
}

impl FetcherConfig {
    /// Timeout for a single fetch attempt
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Pause inserted between consecutive fetch tasks
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

fn default_user_agent() -> String {
    concat!(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
        "AppleWebKit/537.36 (KHTML, like Gecko) ",
        "Chrome/120.0.0.0 Safari/537.36"
    )
    .to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_delay_ms() -> u64 {
    500
}

fn default_url_list_path() -> String {
    "urls_list.txt".to_string()
}

fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_ledger_path() -> String {
    "index.txt".to_string()
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: default_timeout_secs(),
            request_delay_ms: default_delay_ms(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            url_list_path: default_url_list_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            ledger_path: default_ledger_path(),
        }
    }
}

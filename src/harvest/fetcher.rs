//! HTTP fetcher implementation
//!
//! This module handles the single network request made for each task:
//! - Building an HTTP client with the configured user agent and timeout
//! - GET requests to fetch page content
//! - Classifying every non-success outcome

use crate::config::FetcherConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use thiserror::Error;

/// Classified failure of a single fetch attempt
///
/// Every variant is handled identically by the orchestrator (the task fails
/// and the run continues); the variants exist so the reason can be reported.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failure: {0}")]
    ConnectionFailure(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("expected HTML content, got '{0}'")]
    UnexpectedContentType(String),

    #[error("{0}")]
    Other(String),
}

/// Successfully fetched page content
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Raw page body
    pub body: String,

    /// HTTP status code of the response
    pub status_code: u16,

    /// Content-Type header value
    pub content_type: String,
}

/// Builds an HTTP client with the configured user agent and timeout
///
/// The timeout bounds the whole request, including reading the body; an
/// attempt that exceeds it surfaces as [`FetchError::Timeout`].
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.request_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL and classifies the outcome
///
/// Exactly one GET request is made; there is no retry. A response is accepted
/// only if its status is 2xx and its Content-Type declares HTML — anything
/// else is a classified error even when the transport call itself succeeded.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - The page was fetched and is HTML
/// * `Err(FetchError)` - The classified reason the fetch failed
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(classify_request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_html_content_type(&content_type) {
        return Err(FetchError::UnexpectedContentType(content_type));
    }

    let body = response.text().await.map_err(classify_request_error)?;

    Ok(FetchedPage {
        body,
        status_code: status.as_u16(),
        content_type,
    })
}

/// Maps a transport-level reqwest error onto the fetch taxonomy
fn classify_request_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::ConnectionFailure(error.to_string())
    } else {
        FetchError::Other(error.to_string())
    }
}

/// Returns true if the Content-Type header declares HTML
fn is_html_content_type(content_type: &str) -> bool {
    content_type.contains("text/html")
}

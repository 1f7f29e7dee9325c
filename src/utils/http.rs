// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

/// Body of a page retrieved with a success status.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub body: String,
}

/// Capability to retrieve catalog pages.
///
/// Non-success statuses are reported as [`AppError::Status`], so callers only
/// ever parse bodies of successful responses.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// [`PageSource`] backed by a live HTTP client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a source with a client configured from `config`.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        create_async_client(config).map(Self::new)
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(url, status.as_u16()));
        }

        let body = response.text().await?;
        log::debug!("Fetched {} bytes from {url}", body.len());
        Ok(FetchedPage {
            url: url.to_string(),
            body,
        })
    }
}

//! Page fetching.

use std::future::Future;

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::{debug, error};

use crate::error::Result;
use crate::models::config::ScraperConfig;

/// Source of raw page text.
///
/// Implementations never fail: transport errors and non-success statuses
/// are logged and reported as an empty document.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = String> + Send;
}

/// HTTP fetcher backed by a shared `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client with the configured user agent and timeout.
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    async fn try_fetch(&self, url: &str) -> reqwest::Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.text().await
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(body) => {
                debug!("Fetched {} bytes from {}", body.len(), url);
                body
            }
            Err(e) => {
                error!("HTTP error while fetching {}: {}", url, e);
                String::new()
            }
        }
    }
}

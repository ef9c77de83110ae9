//! Outbound HTTP capability
//!
//! Resolvers and fetchers only need "GET this URL and hand me the body".
//! Hiding that behind [`HttpClient`] lets tests swap in an in-memory transport.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

const USER_AGENT: &str = concat!("ZipWeather/", env!("CARGO_PKG_VERSION"));

/// Fully read response from an outbound GET
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET transport used by the location resolver and weather fetcher.
///
/// Implementations return the body whatever the status code; only transport
/// failures (connect, read) are errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: Url) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: Url) -> Result<HttpResponse> {
        let host = url.host_str().unwrap_or_default().to_string();

        // reqwest errors embed the full URL, query (and its key) included
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("request to {host} failed"))?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("failed to read response body from {host}"))?;

        let response = HttpResponse {
            status,
            body: body.to_vec(),
        };
        if !response.is_success() {
            debug!(%host, status, "upstream answered with non-success status");
        }
        Ok(response)
    }
}

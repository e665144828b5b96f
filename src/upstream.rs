//! HTTP access to the National Weather Service API.
//!
//! Every call is a single GET with no retries. Failures are classified into
//! [`FetchError`] and never escape as panics or transport-specific errors.

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode,
};
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::constants::GEO_JSON;

/// Decoded upstream document. Owned by the call that fetched it.
pub type UpstreamResponse = Value;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("upstream returned status {code}")]
    Status { code: u16 },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Source of decoded upstream documents.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<UpstreamResponse, FetchError>;
}

/// Upstream backed by a shared, read-only configured reqwest client.
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
}

impl NwsClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .https_only(config.https_only)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Upstream for NwsClient {
    async fn fetch(&self, url: &str) -> Result<UpstreamResponse, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let data = response.json::<Value>().await?;
        Ok(data)
    }
}

//! Transport abstraction for REST calls.
//!
//! The fetchers only need "GET this URL and give me the JSON body"; keeping
//! that behind a trait lets tests swap the network for a stub.

use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;

/// Issues a GET request and parses the response body as JSON.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and parse its body.
    ///
    /// # Errors
    /// Returns `FetchError::Transport` when no response arrives,
    /// `FetchError::HttpStatus` for a non-2xx status and `FetchError::Parse`
    /// when the body is not JSON.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// HTTP transport backed by reqwest.
///
/// Idle connections are never kept, so every exchange opens its own
/// connection and releases it once the response has been read.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let transport_err = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport_err)?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
            origin: url.to_string(),
            source,
        })
    }
}

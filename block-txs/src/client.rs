use serde_json::Value;
use tracing::{debug, instrument};

use crate::{error::FetchError, models::tx::TxHash, transport::Transport};

/// REST client for the block and transaction endpoints
///
/// Wraps a [`Transport`] and knows how the service lays out its URLs:
/// `<base>/blocks/<height>` and `<base>/txs/<hash>`.
#[derive(Clone, Debug)]
pub struct RestClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> RestClient<T> {
    /// Creates a client for the service rooted at `base_url`
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the block document at `height`
    ///
    /// The height is not checked locally; the remote service decides whether
    /// the block exists.
    #[instrument(skip(self), err)]
    pub async fn fetch_block(&self, height: u64) -> Result<Value, FetchError> {
        let url = format!("{}/blocks/{}", self.base_url, height);
        debug!("Fetching block from {}", url);
        self.transport.get_json(&url).await
    }

    /// Fetch the detail document of a single transaction
    #[instrument(skip(self, hash), fields(hash = %hash), err)]
    pub async fn fetch_tx(&self, hash: &TxHash) -> Result<Value, FetchError> {
        let url = format!("{}/txs/{}", self.base_url, hash);
        debug!("Fetching transaction from {}", url);
        self.transport.get_json(&url).await
    }
}

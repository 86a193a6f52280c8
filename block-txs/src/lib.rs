// Export modules for the binary and the integration tests
pub mod aggregator;
pub mod client;
pub mod config;
pub mod error;
pub mod hash;
pub mod models;
pub mod transport;

use tracing::info;

use crate::{
    aggregator::collect_block_txs,
    client::RestClient,
    config::Config,
    error::FetchError,
    models::tx::TxDetails,
    transport::Transport,
};

/// Fetch the configured block and collect the details of its transactions
///
/// The block request completes before any transaction request starts.
/// Returns `None` when the block holds no transactions.
pub async fn run<T: Transport>(
    config: &Config,
    transport: T,
) -> Result<Option<TxDetails>, FetchError> {
    let client = RestClient::new(&config.rest_url, transport);

    info!("Fetching block {} from {}", config.block_height, client.base_url());
    let block = client.fetch_block(config.block_height).await?;

    collect_block_txs(&client, &block).await
}

use futures_util::{stream::FuturesUnordered, TryStreamExt};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    client::RestClient,
    error::FetchError,
    hash::tx_hash,
    models::{
        block::BlockDocument,
        tx::TxDetails,
    },
    transport::Transport,
};

/// Path of the transaction list inside a block document
pub const TXS_PATH: &str = "block.data.txs";

/// Collect the details of every transaction in `block`
///
/// Hashes are derived from the encoded transactions first; a payload that is
/// not valid base64 aborts the call before any request goes out. One fetch per
/// hash is then put in flight at once and the details are inserted as the
/// responses arrive. The call returns only once every fetch has finished.
///
/// # Returns
///
/// * `Ok(None)` - the block holds no transactions; no request was made
/// * `Ok(Some(details))` - one entry per distinct transaction hash
/// * `Err(_)` - the first failure; pending fetches are dropped and no partial
///   mapping is returned
#[instrument(skip_all, err)]
pub async fn collect_block_txs<T: Transport>(
    client: &RestClient<T>,
    block: &Value,
) -> Result<Option<TxDetails>, FetchError> {
    let document = BlockDocument::deserialize(block).map_err(|source| FetchError::Parse {
        origin: TXS_PATH.to_string(),
        source,
    })?;

    let encoded = document.encoded_txs();
    if encoded.is_empty() {
        info!("Block has no transactions");
        return Ok(None);
    }
    info!("Block has {} transactions", encoded.len());

    let hashes = encoded
        .iter()
        .map(|tx| tx_hash(tx))
        .collect::<Result<Vec<_>, _>>()?;

    // Identical payloads share a hash; both are still fetched and collapse
    // into a single entry.
    let mut pending = hashes
        .into_iter()
        .map(|hash| async move {
            debug!("Scheduling fetch for {}", hash);
            let detail = client.fetch_tx(&hash).await?;
            Ok::<_, FetchError>((hash, detail))
        })
        .collect::<FuturesUnordered<_>>();

    let mut details = TxDetails::with_capacity(pending.len());
    while let Some((hash, detail)) = pending.try_next().await? {
        debug!("Fetched {}", hash);
        details.insert(hash, detail);
    }

    Ok(Some(details))
}

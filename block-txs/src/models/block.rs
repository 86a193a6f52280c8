use serde::Deserialize;

/// Typed view of the `block.data.txs` path of a block document
///
/// Every other field of the document is ignored. A missing level is treated
/// the same as an empty transaction list.
#[derive(Debug, Default, Deserialize)]
pub struct BlockDocument {
    #[serde(default)]
    block: Option<BlockBody>,
}

#[derive(Debug, Default, Deserialize)]
struct BlockBody {
    #[serde(default)]
    data: Option<BlockData>,
}

#[derive(Debug, Default, Deserialize)]
struct BlockData {
    /// Base64-encoded transactions, in the order the block lists them
    #[serde(default)]
    txs: Option<Vec<String>>,
}

impl BlockDocument {
    /// Encoded transactions of the block, empty when the path is absent
    pub fn encoded_txs(&self) -> &[String] {
        self.block
            .as_ref()
            .and_then(|block| block.data.as_ref())
            .and_then(|data| data.txs.as_deref())
            .unwrap_or(&[])
    }
}

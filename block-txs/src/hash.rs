use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};

use crate::{error::FetchError, models::tx::TxHash};

/// Derive the hash of a base64-encoded transaction.
///
/// The payload is decoded with the standard padded alphabet, hashed with
/// SHA-256 and rendered as 64 lowercase hex characters.
pub fn tx_hash(encoded: &str) -> Result<TxHash, FetchError> {
    let bytes = STANDARD.decode(encoded)?;
    let digest = Sha256::digest(&bytes);
    Ok(TxHash::from_hex(hex::encode(digest)))
}

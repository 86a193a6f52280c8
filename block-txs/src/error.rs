use thiserror::Error;

/// Errors raised while fetching a block and its transactions
///
/// Every variant propagates unchanged up to the entry point; nothing in the
/// fetch/aggregate flow recovers from or rewrites them.
#[derive(Error, Debug)]
pub enum FetchError {
    /// A transaction payload was not valid base64
    #[error("Invalid base64 transaction: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The request never produced a response (connection refused, DNS, timeout)
    #[error("Transport error requesting {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote service answered with a non-2xx status
    #[error("Request to {url} failed with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    /// A response body, or the transaction list inside a block, is not the
    /// expected JSON. `origin` is the request URL or the document path.
    #[error("Invalid JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::env;

/// Public Akash REST node used when `REST_URL` is not set
pub const DEFAULT_REST_URL: &str = "https://akash-rest.publicnode.com";

/// Block fetched when `BLOCK_HEIGHT` is not set
pub const DEFAULT_BLOCK_HEIGHT: u64 = 11_260_637;

/// Runtime configuration
///
/// Built once at startup and passed explicitly to [`crate::run`].
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST service, without a trailing slash
    pub rest_url: String,

    /// Height of the block whose transactions are collected
    pub block_height: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rest_url: DEFAULT_REST_URL.to_string(),
            block_height: DEFAULT_BLOCK_HEIGHT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Environment Variables
    ///
    /// * `REST_URL` - REST service base URL (default: "https://akash-rest.publicnode.com")
    /// * `BLOCK_HEIGHT` - Block height to inspect (default: 11260637)
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();

        Self::from_vars(env::var("REST_URL").ok(), env::var("BLOCK_HEIGHT").ok())
    }

    /// Build a configuration from raw variable values, applying defaults for
    /// the ones that are missing
    pub fn from_vars(rest_url: Option<String>, block_height: Option<String>) -> Result<Self> {
        let rest_url = rest_url.unwrap_or_else(|| DEFAULT_REST_URL.to_string());
        let block_height = match block_height {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .wrap_err_with(|| format!("BLOCK_HEIGHT must be an integer, got {raw:?}"))?,
            None => DEFAULT_BLOCK_HEIGHT,
        };

        Ok(Config {
            rest_url: rest_url.trim_end_matches('/').to_string(),
            block_height,
        })
    }
}

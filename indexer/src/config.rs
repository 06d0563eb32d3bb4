//! Startup configuration.
//!
//! One required opaque credential (the data-provider API key) plus the target
//! network, both read from the environment at process startup.

use std::env;

use crate::core::error::AppError;

/// Default network when `ALCHEMY_NETWORK` is unset.
const DEFAULT_NETWORK: &str = "eth-mainnet";

#[derive(Clone, Debug)]
pub struct Config {
    /// Data-provider API key. Treated as opaque; never logged.
    pub api_key: String,
    /// Provider network slug, e.g. `eth-mainnet`.
    pub network: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var("ALCHEMY_API_KEY")
            .map_err(|_| AppError::Config("ALCHEMY_API_KEY must be set in environment".into()))?;

        let network = env::var("ALCHEMY_NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string());

        Ok(Self { api_key, network })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Config("ALCHEMY_API_KEY must not be empty".into()));
        }

        if self.network.trim().is_empty() || self.network.contains('/') {
            return Err(AppError::Config(format!(
                "ALCHEMY_NETWORK is not a valid network slug: {}",
                self.network
            )));
        }

        Ok(())
    }

    /// Full JSON-RPC endpoint for the configured network.
    pub fn rpc_endpoint(&self) -> String {
        format!("https://{}.g.alchemy.com/v2/{}", self.network, self.api_key)
    }
}

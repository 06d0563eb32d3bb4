//! # API Client
//!
//! HTTP transport for the data provider's JSON-RPC interface.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::core::error::AppError;
use crate::core::service::TokenApi;

/// JSON-RPC client for the balance/metadata data provider.
///
/// Holds a pooled `reqwest::Client` and the resolved endpoint for the
/// configured network. No per-call mutable state, so one instance serves
/// many concurrent metadata lookups.
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

impl ApiClient {
    /// Create a new API client for the configured network.
    ///
    /// The client is configured with a 10 second timeout so a stalled
    /// provider cannot wedge a query forever; all other timeout semantics
    /// are the provider's own.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: config.rpc_endpoint(),
        }
    }

    /// Issue a single JSON-RPC call and unwrap the `result` field.
    pub(crate) async fn rpc_call(&self, method: &str, params: Value) -> Result<Value, AppError> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Fetch(format!(
                "Provider returned status: {}",
                response.status()
            )));
        }

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| AppError::Fetch(format!("Failed to parse response: {}", e)))?;

        if let Some(err) = envelope.error {
            return Err(AppError::Fetch(format!(
                "Provider error {}: {}",
                err.code, err.message
            )));
        }

        envelope
            .result
            .ok_or_else(|| AppError::Fetch("Provider response missing result".to_string()))
    }
}

// Implement the TokenApi trait for ApiClient
#[async_trait::async_trait]
impl TokenApi for ApiClient {
    async fn get_token_balances(
        &self,
        address: &str,
    ) -> Result<Vec<shared::dto::tokens::TokenBalanceEntry>, AppError> {
        crate::services::api::tokens::get_token_balances(self, address).await
    }

    async fn get_token_metadata(
        &self,
        contract_address: &str,
    ) -> Result<shared::dto::tokens::TokenMetadata, AppError> {
        crate::services::api::tokens::get_token_metadata(self, contract_address).await
    }
}

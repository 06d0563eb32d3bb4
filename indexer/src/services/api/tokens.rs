//! # Token Endpoints
//!
//! Balance listing, per-contract metadata, and the joined fetch that pairs
//! the two.

use futures::future::join_all;
use serde_json::json;
use shared::dto::tokens::{JoinedBalance, TokenBalanceEntry, TokenBalancesResponse, TokenMetadata};
use tracing::{debug, warn};

use super::client::ApiClient;
use crate::core::error::AppError;
use crate::core::service::TokenApi;

/// List all ERC-20 balance entries for an address.
///
/// The address is forwarded as-is; a malformed address is the provider's to
/// reject, and that rejection surfaces as [`AppError::Fetch`].
pub async fn get_token_balances(
    client: &ApiClient,
    address: &str,
) -> Result<Vec<TokenBalanceEntry>, AppError> {
    let result = client
        .rpc_call("alchemy_getTokenBalances", json!([address, "erc20"]))
        .await?;

    let response: TokenBalancesResponse = serde_json::from_value(result)
        .map_err(|e| AppError::Fetch(format!("Failed to parse balance listing: {}", e)))?;

    Ok(response.token_balances)
}

/// Fetch metadata for a single token contract.
pub async fn get_token_metadata(
    client: &ApiClient,
    contract_address: &str,
) -> Result<TokenMetadata, AppError> {
    let result = client
        .rpc_call("alchemy_getTokenMetadata", json!([contract_address]))
        .await
        .map_err(|e| AppError::Metadata(e.to_string()))?;

    serde_json::from_value(result)
        .map_err(|e| AppError::Metadata(format!("Failed to parse metadata: {}", e)))
}

/// Fetch an address's balances joined with per-token metadata.
///
/// The balance listing runs first; one metadata lookup per entry is then
/// launched, all in flight together, so latency is bounded by the slowest
/// single lookup rather than the sum. The joined result preserves the
/// balance-listing order with metadata at the same index, whatever order the
/// lookups completed in.
///
/// A failed metadata lookup degrades that record to empty metadata rather
/// than discarding the balance entry or aborting the join. A failed balance
/// listing fails the whole operation with no partial result.
pub async fn fetch_joined(api: &dyn TokenApi, address: &str) -> Result<Vec<JoinedBalance>, AppError> {
    let balances = api.get_token_balances(address).await?;
    debug!(
        address = %shared::utils::truncate_address(address),
        token_count = balances.len(),
        "token balances fetched"
    );

    let lookups = balances
        .iter()
        .map(|entry| api.get_token_metadata(&entry.contract_address));
    let metadata = join_all(lookups).await;

    let joined = balances
        .into_iter()
        .zip(metadata)
        .map(|(balance, outcome)| {
            let metadata = match outcome {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(
                        contract = %balance.contract_address,
                        error = %e,
                        "metadata lookup failed; keeping balance with empty metadata"
                    );
                    TokenMetadata::default()
                }
            };
            JoinedBalance { balance, metadata }
        })
        .collect();

    Ok(joined)
}

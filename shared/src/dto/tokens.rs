//! Token balance and metadata DTOs.
//!
//! These types mirror the data provider's `alchemy_getTokenBalances` and
//! `alchemy_getTokenMetadata` JSON-RPC payloads.

use serde::{Deserialize, Serialize};

/// One token-balance row for a queried account.
///
/// Produced once per token contract the account has interaction history with.
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalanceEntry {
    /// Token contract address (0x hex).
    pub contract_address: String,
    /// Raw balance in the token's smallest unit, hex encoded.
    /// `None` when the provider could not read the balance.
    pub token_balance: Option<String>,
}

/// Provider response for a token-balance listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalancesResponse {
    /// The queried account address, echoed back by the provider.
    pub address: String,
    pub token_balances: Vec<TokenBalanceEntry>,
}

/// Descriptive attributes of a token contract.
///
/// Every field is optional: metadata is fetched independently per contract
/// and may be partially or wholly unavailable. Rendering must fall back
/// gracefully on absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    /// Power-of-ten scaling factor between the raw integer balance and the
    /// token's display unit.
    pub decimals: Option<u8>,
    /// Token icon URL.
    pub logo: Option<String>,
}

/// A balance entry paired with its token metadata.
///
/// Joined results are index-aligned with the balance listing they were built
/// from: position `i` of the balances corresponds to position `i` of the
/// metadata lookups, whatever order those lookups completed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedBalance {
    pub balance: TokenBalanceEntry,
    pub metadata: TokenMetadata,
}

//! # Capability Traits
//!
//! Traits for the two external collaborators, enabling dependency injection
//! and test mocks.
//!
//! The wallet handle is an injected capability rather than an ambient global:
//! anything that can grant account access and emit account/chain change
//! notifications can back a [`WalletProvider`]. Likewise [`TokenApi`]
//! abstracts the balance/metadata data provider so the query pipeline can be
//! exercised against mocks.

use async_trait::async_trait;
use shared::dto::tokens::{TokenBalanceEntry, TokenMetadata};

use crate::core::error::AppError;

/// Wallet-originated notification.
///
/// The message-passing rendition of the wallet's callback subscriptions:
/// providers push these over a channel, and the wallet session registers a
/// single consumer per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// The wallet's account list changed; the first entry (if any) is the
    /// new primary account.
    AccountsChanged(Vec<String>),
    /// The wallet switched networks. Per-chain token sets are not
    /// cross-compatible, so consumers are expected to do a full reload.
    ChainChanged(String),
}

/// Host wallet boundary.
///
/// The core only consumes this; it never implements wallet connectivity
/// itself (test mocks aside).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet for account access permissions.
    ///
    /// Returns the granted accounts on success; rejection surfaces as
    /// [`AppError::PermissionDenied`].
    async fn request_permissions(&self) -> Result<Vec<String>, AppError>;

    /// List the currently exposed accounts, primary account first.
    async fn request_accounts(&self) -> Result<Vec<String>, AppError>;

    /// Subscribe to wallet-originated notifications.
    fn subscribe(&self) -> async_channel::Receiver<WalletEvent>;
}

/// Balance/metadata data-provider boundary.
///
/// Implementations must hold no per-call mutable state: metadata lookups for
/// many contracts are issued concurrently against one shared instance.
#[async_trait]
pub trait TokenApi: Send + Sync {
    /// List all token-balance entries for an address.
    ///
    /// The address is passed through unvalidated; the provider's rejection of
    /// a malformed address surfaces as [`AppError::Fetch`].
    async fn get_token_balances(&self, address: &str) -> Result<Vec<TokenBalanceEntry>, AppError>;

    /// Fetch metadata for a single token contract.
    async fn get_token_metadata(&self, contract_address: &str) -> Result<TokenMetadata, AppError>;
}

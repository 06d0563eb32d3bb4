//! # Common Error Types
//!
//! Consolidated error handling for the indexer.
//!
//! Errors are categorized by their source:
//!
//! - **WalletUnavailable / PermissionDenied**: host wallet boundary
//! - **Fetch / Metadata**: data-provider boundary
//! - **Config**: startup configuration
//!
//! ## Propagation Policy
//!
//! Wallet and balance errors are caught at the boundary where they occur and
//! translated into state transitions or logged diagnostics; they never reach
//! the presentation layer uncaught. `PermissionDenied` is logged and leaves
//! state untouched; `Fetch` resets the query to idle with a dismissible
//! notice; `Metadata` is swallowed per-token (the record is kept with absent
//! fields). Only `WalletUnavailable` and `Config` are fatal, and only at
//! startup.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// No wallet provider is present in the host environment.
    ///
    /// Fatal at startup: the wallet session cannot be constructed without a
    /// provider, so this is reported by whoever performs discovery rather
    /// than caught per-call.
    #[error("wallet provider unavailable: {0}")]
    WalletUnavailable(String),

    /// The user or the provider rejected a connect request.
    #[error("wallet permission denied: {0}")]
    PermissionDenied(String),

    /// The balance listing or its transport failed.
    ///
    /// Covers network failures, non-success HTTP statuses, provider-reported
    /// JSON-RPC errors, and malformed responses.
    #[error("balance fetch failed: {0}")]
    Fetch(String),

    /// A per-token metadata lookup failed.
    ///
    /// Never user-visible: the joined record is kept with all metadata
    /// fields absent.
    #[error("token metadata unavailable: {0}")]
    Metadata(String),

    /// Startup configuration failure.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the indexer crate.
pub type Result<T> = std::result::Result<T, AppError>;

//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the indexer core and the balance/
//! metadata data provider, plus display helpers any frontend can use.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for provider communication
//!   - **[`dto::tokens`]**: Token balance and metadata DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The token DTOs mirror the data provider's JSON-RPC payloads:
//! - Field names use **snake_case** in Rust and map to **camelCase** on the
//!   wire via `#[serde(rename_all = "camelCase")]`
//! - Optional fields deserialize from `null` or absent keys into `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::tokens::TokenBalanceEntry;
//! use shared::utils::truncate_address;
//!
//! let entry: TokenBalanceEntry = serde_json::from_str(
//!     r#"{"contractAddress":"0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48","tokenBalance":"0x01"}"#,
//! ).unwrap();
//!
//! let display = truncate_address(&entry.contract_address);
//! assert_eq!(display, "0xa0...eb48");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;

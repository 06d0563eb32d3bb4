//! # Data Transfer Objects (DTOs)
//!
//! This module contains the data structures exchanged with the balance and
//! metadata data provider.
//!
//! ## Module Organization
//!
//! - [`tokens`] - Token balance entries, token metadata, and joined results
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case in Rust, camelCase on the wire
//!   (the provider's JSON-RPC payload convention)
//! - **Optional fields**: `None` on `null` or absent keys
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example Provider Payload
//!
//! ```text
//! {
//!   "address": "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
//!   "tokenBalances": [
//!     {
//!       "contractAddress": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
//!       "tokenBalance": "0x0000000000000000000000000000000000000000000000000000000005f5e100"
//!     }
//!   ]
//! }
//! ```

pub mod tokens;

pub use tokens::*;

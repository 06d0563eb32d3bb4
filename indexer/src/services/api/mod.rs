//! # Data-Provider API Client Module
//!
//! JSON-RPC client for the balance/metadata data provider.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and the JSON-RPC transport
//! └── tokens.rs   - Token endpoints (balance listing, metadata, joined fetch)
//! ```

pub mod client;
pub mod tokens;

pub use client::ApiClient;
pub use tokens::fetch_joined;

//! # Services Module
//!
//! External service integrations for the token indexer.
//!
//! ```text
//! services/
//! ├── api/        - Data-provider JSON-RPC client
//! │                 (balance listing, token metadata, joined fetch)
//! └── wallet.rs   - Wallet session
//!                   (connection state machine, account/chain event pump)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Indexer Core                         │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐        │
//! │  │  ApiClient       │       │  WalletSession   │        │
//! │  │  (api/)          │       │  (wallet.rs)     │        │
//! │  └────────┬─────────┘       └────────┬─────────┘        │
//! │           │                          │                  │
//! └───────────┼──────────────────────────┼──────────────────┘
//!             │                          │
//!             │ HTTPS JSON-RPC           │ WalletProvider trait
//!             ▼                          ▼
//! ┌─────────────────────┐    ┌─────────────────────────────┐
//! │  Data provider      │    │  Host wallet                │
//! │                     │    │                             │
//! │  getTokenBalances   │    │  - permission request       │
//! │  getTokenMetadata   │    │  - account listing          │
//! │                     │    │  - accounts/chain events    │
//! └─────────────────────┘    └─────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! - **ApiClient**: wraps `reqwest::Client` (internally thread-safe); can be
//!   put in an `Arc` and shared across concurrent metadata lookups.
//! - **WalletSession**: owns its state behind a `parking_lot::RwLock`;
//!   collaborators read via snapshot accessors only. Lock guards are never
//!   held across an `.await`.

pub mod api;
pub mod wallet;

//! # ERC-20 Token Indexer - Library Root
//!
//! Core of a token-balance indexer: connect a wallet, supply an address, and
//! retrieve that address's ERC-20 holdings with human-readable balances and
//! per-token metadata (symbol, decimals, logo).
//!
//! This library crate contains all modules used by the binary crate (`main.rs`)
//! and by any embedding frontend.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │               indexer (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client (JSON-RPC)                │
//! │  alloy         - 256-bit raw balance arithmetic        │
//! │  tracing       - Structured diagnostics                │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ WalletProvider trait         │ HTTPS JSON-RPC
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Host wallet    │          │   Balance/metadata      │
//! │  (injected)     │          │   data provider         │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestration and state exposed to the presentation layer
//!   - `state`: `QueryState` and the display-boundary snapshot
//!   - `controller`: the query lifecycle (Idle → Loading → Ready, last-query-wins)
//! - **services**: External integrations
//!   - `api`: data-provider client (balance listing, metadata, joined fetch)
//!   - `wallet`: wallet session state machine and event pump
//! - **core**: Error type and the injected capability traits
//! - **config**: Startup configuration from the environment
//! - **utils**: Balance formatting
//!
//! ## Control Flow
//!
//! The wallet session produces an address, the query controller invokes the
//! balance fetcher with it, the fetcher returns index-aligned joined records,
//! and the formatter renders each record's balance on demand:
//!
//! ```rust,ignore
//! let app = App::new(provider, api);
//! app.connect_toggle().await;                  // session -> Connected + address
//! let address = app.snapshot().active_address;
//! app.submit_query(&address).await;            // Loading -> Ready(joined)
//! for row in app.snapshot().query.results().unwrap_or_default() {
//!     let balance = row.balance.token_balance.as_deref().unwrap_or("0x0");
//!     println!("{}", format_balance(balance, row.metadata.decimals));
//! }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

//! # Core Abstractions
//!
//! Foundational pieces used throughout the indexer:
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Capability traits for dependency injection
//!   (`WalletProvider`, `TokenApi`) and the wallet event stream
//!
//! The traits exist so the wallet and data-provider boundaries can be mocked
//! in tests and swapped by embedders:
//!
//! ```rust,ignore
//! // In production: a real provider handle and the HTTP client
//! let api: Arc<dyn TokenApi> = Arc::new(ApiClient::new(&config));
//!
//! // In tests: mock implementations
//! let api: Arc<dyn TokenApi> = Arc::new(MockTokenApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{TokenApi, WalletEvent, WalletProvider};

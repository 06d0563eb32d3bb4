//! # Application Orchestrator
//!
//! The [`App`] facade wires the wallet session and the query controller and
//! exposes the display boundary: a state snapshot, a dismissible failure
//! notice, the wallet event stream, and the two user actions
//! (connect/disconnect toggle, submit query).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Presentation layer (not this crate)                     │
//! │     │ connect_toggle / submit_query      ▲ snapshot()    │
//! ├─────▼────────────────────────────────────┴───────────────┤
//! │  App                                                     │
//! │  ┌────────────────────┐      ┌─────────────────────────┐ │
//! │  │  WalletSession     │      │  QueryController        │ │
//! │  │  connection state  │      │  Idle/Loading/Ready     │ │
//! │  │  active address    │      │  last-query-wins        │ │
//! │  └─────────┬──────────┘      └───────────┬─────────────┘ │
//! └────────────┼─────────────────────────────┼───────────────┘
//!              │ WalletProvider              │ TokenApi
//!              ▼                             ▼
//!       host wallet                   data provider
//! ```
//!
//! Each piece of shared mutable state has exactly one owner and is mutated
//! only through that owner's methods; the facade never reaches into either
//! component's state directly.
//!
//! ## Wallet Events
//!
//! The session's event pump is started once at construction. Applied events
//! are forwarded on [`App::events`]; an embedder receiving
//! [`WalletEvent::ChainChanged`] is expected to exit so its supervisor
//! restarts the process; per-chain token sets are not cross-compatible, so
//! no in-memory reconciliation is attempted.

pub mod controller;
pub mod state;

use std::sync::Arc;

use crate::app::controller::QueryController;
use crate::app::state::StateSnapshot;
use crate::core::service::{TokenApi, WalletEvent, WalletProvider};
use crate::services::wallet::WalletSession;

/// Application facade over the wallet session and the query controller.
pub struct App {
    pub session: Arc<WalletSession>,
    pub controller: Arc<QueryController>,
    events: async_channel::Receiver<WalletEvent>,
}

impl App {
    /// Wire the components and start the wallet event pump.
    ///
    /// Both collaborators are injected; there is no ambient provider lookup.
    /// Must be called from within a tokio runtime (the pump is a spawned
    /// task).
    pub fn new(provider: Arc<dyn WalletProvider>, api: Arc<dyn TokenApi>) -> Self {
        let session = Arc::new(WalletSession::new(provider));
        let (forward_tx, forward_rx) = async_channel::unbounded();
        session.start_event_pump(forward_tx);

        Self {
            session,
            controller: Arc::new(QueryController::new(api)),
            events: forward_rx,
        }
    }

    /// The connect/disconnect toggle.
    ///
    /// Disconnecting also resets the query state so no stale results survive.
    pub async fn connect_toggle(&self) {
        if self.session.is_connected() {
            self.session.request_disconnect();
            self.controller.reset();
        } else {
            self.session.request_connect().await;
        }
    }

    /// Submit a balance query for an address (typically the active address,
    /// but any address the user typed works the same).
    pub async fn submit_query(&self, address: &str) {
        self.controller.run_query(address).await;
    }

    /// Capture the display boundary at one instant.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            connection: self.session.connection_state(),
            active_address: self.session.active_address(),
            query: self.controller.query_state(),
        }
    }

    /// Pop the pending query-failure notice, if any.
    pub fn take_notice(&self) -> Option<String> {
        self.controller.take_notice()
    }

    /// Wallet events, already applied to the session, in arrival order.
    pub fn events(&self) -> async_channel::Receiver<WalletEvent> {
        self.events.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ConnectionState, QueryState};
    use crate::core::error::AppError;
    use async_trait::async_trait;
    use shared::dto::tokens::{TokenBalanceEntry, TokenMetadata};

    struct MockProvider {
        accounts: Vec<String>,
        event_rx: async_channel::Receiver<WalletEvent>,
    }

    impl MockProvider {
        fn new(accounts: Vec<&str>) -> (Arc<Self>, async_channel::Sender<WalletEvent>) {
            let (tx, rx) = async_channel::unbounded();
            let provider = Arc::new(Self {
                accounts: accounts.into_iter().map(String::from).collect(),
                event_rx: rx,
            });
            (provider, tx)
        }
    }

    #[async_trait]
    impl WalletProvider for MockProvider {
        async fn request_permissions(&self) -> Result<Vec<String>, AppError> {
            Ok(self.accounts.clone())
        }

        async fn request_accounts(&self) -> Result<Vec<String>, AppError> {
            Ok(self.accounts.clone())
        }

        fn subscribe(&self) -> async_channel::Receiver<WalletEvent> {
            self.event_rx.clone()
        }
    }

    struct MockTokenApi;

    #[async_trait]
    impl TokenApi for MockTokenApi {
        async fn get_token_balances(
            &self,
            _address: &str,
        ) -> Result<Vec<TokenBalanceEntry>, AppError> {
            Ok(vec![TokenBalanceEntry {
                contract_address: "0xa".to_string(),
                token_balance: Some("0x01".to_string()),
            }])
        }

        async fn get_token_metadata(
            &self,
            _contract_address: &str,
        ) -> Result<TokenMetadata, AppError> {
            Ok(TokenMetadata::default())
        }
    }

    #[tokio::test]
    async fn test_connect_query_disconnect_lifecycle() {
        let (provider, _tx) = MockProvider::new(vec!["0xaaa"]);
        let app = App::new(provider, Arc::new(MockTokenApi));

        // Idle and disconnected at startup
        let snapshot = app.snapshot();
        assert_eq!(snapshot.connection, ConnectionState::Disconnected);
        assert_eq!(snapshot.query, QueryState::Idle);
        assert!(!snapshot.can_query());

        app.connect_toggle().await;
        let snapshot = app.snapshot();
        assert_eq!(snapshot.active_address, "0xaaa");
        assert!(snapshot.can_query());

        app.submit_query(&snapshot.active_address).await;
        assert!(app.snapshot().query.results().is_some());

        // Disconnect clears the address and drops the held result
        app.connect_toggle().await;
        let snapshot = app.snapshot();
        assert_eq!(snapshot.connection, ConnectionState::Disconnected);
        assert_eq!(snapshot.active_address, "");
        assert_eq!(snapshot.query, QueryState::Idle);
    }

    #[tokio::test]
    async fn test_emptied_accounts_disable_queries_without_disconnecting() {
        let (provider, event_tx) = MockProvider::new(vec!["0xaaa"]);
        let app = App::new(provider, Arc::new(MockTokenApi));
        app.connect_toggle().await;

        event_tx
            .send(WalletEvent::AccountsChanged(vec![]))
            .await
            .unwrap();
        // The forwarded copy signals that the session has been updated
        app.events().recv().await.unwrap();

        let snapshot = app.snapshot();
        assert_eq!(snapshot.connection, ConnectionState::Connected);
        assert!(!snapshot.can_query());

        // Submitting with the (now empty) active address is a no-op
        app.submit_query(&snapshot.active_address).await;
        assert_eq!(app.snapshot().query, QueryState::Idle);
    }

    #[tokio::test]
    async fn test_chain_change_is_surfaced_to_the_embedder() {
        let (provider, event_tx) = MockProvider::new(vec!["0xaaa"]);
        let app = App::new(provider, Arc::new(MockTokenApi));

        event_tx
            .send(WalletEvent::ChainChanged("0x89".to_string()))
            .await
            .unwrap();

        let event = app.events().recv().await.unwrap();
        assert_eq!(event, WalletEvent::ChainChanged("0x89".to_string()));
    }
}

//! # Wallet Session
//!
//! Owns the connection state machine and the active address, and reacts to
//! wallet-originated account/network-change notifications.
//!
//! ## State Ownership
//!
//! `ConnectionState` and the active address live behind the session's own
//! lock and are mutated only through the session's methods: connect and
//! disconnect actions from the user, or account-change events from the
//! wallet. No other component writes them.
//!
//! ## Event Registration
//!
//! [`WalletSession::start_event_pump`] subscribes to the provider's event
//! stream exactly once per process lifetime; repeated calls are logged
//! no-ops. This keeps a handler from being registered on every render of an
//! embedding frontend, which would invoke it multiple times per event.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::core::service::{WalletEvent, WalletProvider};

/// Wallet connection state.
///
/// Exactly one value at any time; transitions only via explicit user action.
/// Account-change events rewrite the active address but deliberately do not
/// drive this flag (the original behavior is preserved; an empty address is
/// what gates queries).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

struct SessionInner {
    connection: ConnectionState,
    /// Active account address; empty when no account is exposed.
    address: String,
}

/// Wallet session backed by an injected [`WalletProvider`].
///
/// Construction requires a provider: absence of one in the host environment
/// is a startup error reported by whoever performs discovery, not something
/// caught per-call.
pub struct WalletSession {
    provider: Arc<dyn WalletProvider>,
    inner: RwLock<SessionInner>,
    pump_started: AtomicBool,
}

impl WalletSession {
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            provider,
            inner: RwLock::new(SessionInner {
                connection: ConnectionState::Disconnected,
                address: String::new(),
            }),
            pump_started: AtomicBool::new(false),
        }
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.inner.read().connection
    }

    pub fn is_connected(&self) -> bool {
        self.inner.read().connection.is_connected()
    }

    /// Active account address, or an empty string when none is exposed.
    pub fn active_address(&self) -> String {
        self.inner.read().address.clone()
    }

    /// Ask the host wallet for account access.
    ///
    /// On success the session transitions to `Connected` and adopts the first
    /// account the wallet reports. On rejection or provider error the state
    /// is left untouched and the error is logged; a denied connect is not a
    /// failure of the application.
    pub async fn request_connect(&self) {
        match self.provider.request_permissions().await {
            Ok(_) => {
                self.inner.write().connection = ConnectionState::Connected;

                match self.provider.request_accounts().await {
                    Ok(accounts) => {
                        let address = accounts.first().cloned().unwrap_or_default();
                        info!(address = %shared::utils::truncate_address(&address), "wallet connected");
                        self.inner.write().address = address;
                    }
                    Err(e) => {
                        warn!(error = %e, "account listing failed after connect");
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "wallet connect rejected; staying disconnected");
            }
        }
    }

    /// Drop the connection and clear the active address.
    ///
    /// The query controller must be reset alongside this so no stale results
    /// survive a disconnect; the [`crate::app::App`] facade does both.
    pub fn request_disconnect(&self) {
        let mut inner = self.inner.write();
        inner.connection = ConnectionState::Disconnected;
        inner.address.clear();
        info!("wallet disconnected");
    }

    /// Handle a wallet-originated account change.
    ///
    /// Mirrors whatever the wallet reports as the primary account,
    /// unconditionally: the address is rewritten regardless of the current
    /// connection flag, and an empty list clears it. An empty address makes
    /// queries a no-op, so the session behaves as disconnected for query
    /// purposes even if the flag still says `Connected`.
    pub fn on_accounts_changed(&self, accounts: &[String]) {
        let address = accounts.first().cloned().unwrap_or_default();
        if address.is_empty() {
            info!("wallet reports no accounts; queries disabled until one is exposed");
        } else {
            debug!(address = %shared::utils::truncate_address(&address), "active account changed");
        }
        self.inner.write().address = address;
    }

    /// Handle a wallet-originated network change.
    ///
    /// No attempt is made to reconcile in-memory state against the new
    /// network; per-chain token sets are not cross-compatible. Consumers of
    /// the event stream are expected to do a full process reload.
    pub fn on_chain_changed(&self, chain_id: &str) {
        info!(chain_id, "chain changed; full reload required");
    }

    /// Subscribe to the provider's event stream and dispatch notifications.
    ///
    /// Applies each event to the session, then forwards it on `forward` for
    /// the embedder (which reacts to `ChainChanged` by reloading). Guarded to
    /// register exactly once per process; later calls are no-ops.
    pub fn start_event_pump(self: &Arc<Self>, forward: async_channel::Sender<WalletEvent>) {
        if self.pump_started.swap(true, Ordering::SeqCst) {
            debug!("wallet event pump already running; ignoring duplicate registration");
            return;
        }

        let session = Arc::clone(self);
        let events = self.provider.subscribe();

        tokio::spawn(async move {
            while let Ok(event) = events.recv().await {
                match &event {
                    WalletEvent::AccountsChanged(accounts) => {
                        session.on_accounts_changed(accounts);
                    }
                    WalletEvent::ChainChanged(chain_id) => {
                        session.on_chain_changed(chain_id);
                    }
                }
                if forward.send(event).await.is_err() {
                    // Embedder went away; stop pumping
                    break;
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    struct MockProvider {
        accounts: Vec<String>,
        deny: bool,
        event_rx: async_channel::Receiver<WalletEvent>,
        subscribe_calls: AtomicUsize,
    }

    impl MockProvider {
        fn new(accounts: Vec<&str>) -> (Arc<Self>, async_channel::Sender<WalletEvent>) {
            let (tx, rx) = async_channel::unbounded();
            let provider = Arc::new(Self {
                accounts: accounts.into_iter().map(String::from).collect(),
                deny: false,
                event_rx: rx,
                subscribe_calls: AtomicUsize::new(0),
            });
            (provider, tx)
        }

        fn denying() -> Arc<Self> {
            let (tx, rx) = async_channel::unbounded();
            drop(tx);
            Arc::new(Self {
                accounts: vec![],
                deny: true,
                event_rx: rx,
                subscribe_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl WalletProvider for MockProvider {
        async fn request_permissions(&self) -> Result<Vec<String>, AppError> {
            if self.deny {
                Err(AppError::PermissionDenied("user rejected request".into()))
            } else {
                Ok(self.accounts.clone())
            }
        }

        async fn request_accounts(&self) -> Result<Vec<String>, AppError> {
            Ok(self.accounts.clone())
        }

        fn subscribe(&self) -> async_channel::Receiver<WalletEvent> {
            self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
            self.event_rx.clone()
        }
    }

    #[tokio::test]
    async fn test_connect_adopts_first_account() {
        let (provider, _tx) = MockProvider::new(vec!["0xaaa", "0xbbb"]);
        let session = WalletSession::new(provider);

        assert!(!session.is_connected());
        session.request_connect().await;

        assert!(session.is_connected());
        assert_eq!(session.active_address(), "0xaaa");
    }

    #[tokio::test]
    async fn test_denied_connect_leaves_state_unchanged() {
        let session = WalletSession::new(MockProvider::denying());

        session.request_connect().await;

        assert_eq!(session.connection_state(), ConnectionState::Disconnected);
        assert_eq!(session.active_address(), "");
    }

    #[tokio::test]
    async fn test_disconnect_clears_address() {
        let (provider, _tx) = MockProvider::new(vec!["0xaaa"]);
        let session = WalletSession::new(provider);

        session.request_connect().await;
        session.request_disconnect();

        assert_eq!(session.connection_state(), ConnectionState::Disconnected);
        assert_eq!(session.active_address(), "");
    }

    #[tokio::test]
    async fn test_accounts_changed_overrides_address_unconditionally() {
        let (provider, _tx) = MockProvider::new(vec!["0xaaa"]);
        let session = WalletSession::new(provider);

        // Not connected, but the event still rewrites the address
        session.on_accounts_changed(&["0xccc".to_string()]);
        assert_eq!(session.active_address(), "0xccc");
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn test_empty_accounts_change_clears_address_while_connected() {
        let (provider, _tx) = MockProvider::new(vec!["0xaaa"]);
        let session = WalletSession::new(provider);
        session.request_connect().await;

        session.on_accounts_changed(&[]);

        // Address is cleared but the connection flag is untouched
        assert_eq!(session.active_address(), "");
        assert!(session.is_connected());
    }

    #[tokio::test]
    async fn test_event_pump_applies_and_forwards() {
        let (provider, event_tx) = MockProvider::new(vec!["0xaaa"]);
        let session = Arc::new(WalletSession::new(provider));
        let (forward_tx, forward_rx) = async_channel::unbounded();

        session.start_event_pump(forward_tx);

        event_tx
            .send(WalletEvent::AccountsChanged(vec!["0xddd".to_string()]))
            .await
            .unwrap();

        // The forwarded copy arrives after the session has been updated
        let forwarded = forward_rx.recv().await.unwrap();
        assert_eq!(
            forwarded,
            WalletEvent::AccountsChanged(vec!["0xddd".to_string()])
        );
        assert_eq!(session.active_address(), "0xddd");
    }

    #[tokio::test]
    async fn test_event_pump_registers_once() {
        let (provider, _tx) = MockProvider::new(vec!["0xaaa"]);
        let session = Arc::new(WalletSession::new(provider.clone()));
        let (forward_tx, _forward_rx) = async_channel::unbounded();

        session.start_event_pump(forward_tx.clone());
        session.start_event_pump(forward_tx);

        assert_eq!(provider.subscribe_calls.load(Ordering::SeqCst), 1);
    }
}

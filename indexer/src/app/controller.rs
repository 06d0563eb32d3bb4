//! # Query Controller
//!
//! Orchestrates the end-to-end "check balances" action: sequencing the
//! joined fetch, tracking in-flight state, and exposing a consistent
//! Idle / Loading / Ready view to the presentation layer.
//!
//! ## Last-Query-Wins
//!
//! There is no cancellation token. A query that begins while another is in
//! flight supersedes it by bumping a generation counter; when the stale call
//! eventually resolves, its generation no longer matches and the result is
//! discarded instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::app::state::QueryState;
use crate::core::service::TokenApi;
use crate::services::api::tokens::fetch_joined;

/// Owns [`QueryState`] and the dismissible failure notice.
pub struct QueryController {
    api: Arc<dyn TokenApi>,
    state: RwLock<QueryState>,
    notice: RwLock<Option<String>>,
    /// Generation of the most recently issued query or reset.
    generation: AtomicU64,
}

impl QueryController {
    pub fn new(api: Arc<dyn TokenApi>) -> Self {
        Self {
            api,
            state: RwLock::new(QueryState::Idle),
            notice: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn query_state(&self) -> QueryState {
        self.state.read().clone()
    }

    /// Pop the pending failure notice, if any.
    ///
    /// Failures are reported to the presentation layer as a dismissible
    /// notice rather than an error path; taking it dismisses it.
    pub fn take_notice(&self) -> Option<String> {
        self.notice.write().take()
    }

    /// Return to `Idle`, discarding any result and superseding any query
    /// still in flight. Used on disconnect.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.state.write() = QueryState::Idle;
    }

    /// Run the balance query for `address`.
    ///
    /// No-op when the address is empty. Sets `Loading` immediately so the
    /// display never shows stale data while the fetch is in flight. On
    /// success the joined result becomes `Ready`; on failure the state
    /// returns to `Idle` and the error is recorded as a dismissible notice.
    /// No automatic retry either way.
    pub async fn run_query(&self, address: &str) {
        if address.is_empty() {
            debug!("ignoring query with empty address");
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.write() = QueryState::Loading;

        let started = Instant::now();
        let result = fetch_joined(self.api.as_ref(), address).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(
                address = %shared::utils::truncate_address(address),
                "discarding superseded query result"
            );
            return;
        }

        match result {
            Ok(rows) => {
                info!(
                    address = %shared::utils::truncate_address(address),
                    token_count = rows.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "balance query complete"
                );
                *self.state.write() = QueryState::Ready(rows);
            }
            Err(e) => {
                warn!(
                    address = %shared::utils::truncate_address(address),
                    error = %e,
                    "balance query failed"
                );
                *self.state.write() = QueryState::Idle;
                *self.notice.write() = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use async_trait::async_trait;
    use shared::dto::tokens::{TokenBalanceEntry, TokenMetadata};
    use std::collections::HashMap;
    use std::time::Duration;

    /// Mock whose balance listing is keyed by address, with optional
    /// per-address delays to stage overlapping queries.
    struct MockTokenApi {
        listings: HashMap<String, Vec<TokenBalanceEntry>>,
        delays_ms: HashMap<String, u64>,
        fail: bool,
    }

    impl MockTokenApi {
        fn new() -> Self {
            Self {
                listings: HashMap::new(),
                delays_ms: HashMap::new(),
                fail: false,
            }
        }

        fn listing(mut self, address: &str, contracts: &[&str]) -> Self {
            let entries = contracts
                .iter()
                .map(|contract| TokenBalanceEntry {
                    contract_address: contract.to_string(),
                    token_balance: Some("0x01".to_string()),
                })
                .collect();
            self.listings.insert(address.to_string(), entries);
            self
        }

        fn delay(mut self, address: &str, ms: u64) -> Self {
            self.delays_ms.insert(address.to_string(), ms);
            self
        }

        fn failing() -> Self {
            Self {
                listings: HashMap::new(),
                delays_ms: HashMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl TokenApi for MockTokenApi {
        async fn get_token_balances(
            &self,
            address: &str,
        ) -> Result<Vec<TokenBalanceEntry>, AppError> {
            if let Some(ms) = self.delays_ms.get(address) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            if self.fail {
                return Err(AppError::Fetch("provider rejected request".into()));
            }
            Ok(self.listings.get(address).cloned().unwrap_or_default())
        }

        async fn get_token_metadata(
            &self,
            _contract_address: &str,
        ) -> Result<TokenMetadata, AppError> {
            Ok(TokenMetadata::default())
        }
    }

    fn contracts_of(state: &QueryState) -> Vec<String> {
        state
            .results()
            .unwrap_or_default()
            .iter()
            .map(|row| row.balance.contract_address.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_empty_address_is_a_no_op() {
        let api = Arc::new(MockTokenApi::new().listing("0xuser", &["0xa"]));
        let controller = QueryController::new(api);

        controller.run_query("").await;

        assert_eq!(controller.query_state(), QueryState::Idle);
    }

    #[tokio::test]
    async fn test_successful_query_becomes_ready() {
        let api = Arc::new(MockTokenApi::new().listing("0xuser", &["0xa", "0xb"]));
        let controller = QueryController::new(api);

        controller.run_query("0xuser").await;

        assert_eq!(contracts_of(&controller.query_state()), vec!["0xa", "0xb"]);
        assert_eq!(controller.take_notice(), None);
    }

    #[tokio::test]
    async fn test_failed_query_resets_to_idle_with_notice() {
        let controller = QueryController::new(Arc::new(MockTokenApi::failing()));

        controller.run_query("0xuser").await;

        assert_eq!(controller.query_state(), QueryState::Idle);
        let notice = controller.take_notice().unwrap();
        assert!(notice.contains("balance fetch failed"));
        // Taking the notice dismisses it
        assert_eq!(controller.take_notice(), None);
    }

    #[tokio::test]
    async fn test_stale_query_result_is_discarded() {
        // Query A is slow, query B supersedes it; when A resolves later the
        // state must still reflect B
        let api = Arc::new(
            MockTokenApi::new()
                .listing("0xslow", &["0xa"])
                .listing("0xfast", &["0xb"])
                .delay("0xslow", 60),
        );
        let controller = Arc::new(QueryController::new(api));

        let slow = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.run_query("0xslow").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        controller.run_query("0xfast").await;
        assert_eq!(contracts_of(&controller.query_state()), vec!["0xb"]);

        slow.await.unwrap();
        assert_eq!(contracts_of(&controller.query_state()), vec!["0xb"]);
    }

    #[tokio::test]
    async fn test_new_query_discards_prior_ready_immediately() {
        let api = Arc::new(
            MockTokenApi::new()
                .listing("0xuser", &["0xa"])
                .listing("0xother", &["0xb"])
                .delay("0xother", 60),
        );
        let controller = Arc::new(QueryController::new(api));

        controller.run_query("0xuser").await;
        assert!(controller.query_state().results().is_some());

        let pending = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.run_query("0xother").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        // The old Ready value is gone while the new query is in flight
        assert!(controller.query_state().is_loading());
        pending.await.unwrap();
    }

    #[tokio::test]
    async fn test_reset_supersedes_in_flight_query() {
        let api = Arc::new(MockTokenApi::new().listing("0xslow", &["0xa"]).delay("0xslow", 60));
        let controller = Arc::new(QueryController::new(api));

        let pending = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.run_query("0xslow").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        controller.reset();

        pending.await.unwrap();
        // The in-flight result resolved after the reset and was discarded
        assert_eq!(controller.query_state(), QueryState::Idle);
    }
}

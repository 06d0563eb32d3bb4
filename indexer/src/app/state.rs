//! # Application State Types
//!
//! The query lifecycle enum and the snapshot handed to the presentation
//! layer. The connection flag itself lives with its owner,
//! [`crate::services::wallet::WalletSession`].

use shared::dto::tokens::JoinedBalance;

pub use crate::services::wallet::ConnectionState;

/// Query lifecycle.
///
/// `Idle` at startup and after a disconnect; `Loading` from the moment a
/// query begins (any prior `Ready` value is discarded right then, not when
/// the new result lands); `Ready` only ever holds a complete joined result.
/// The presentation layer observes nothing, a spinner, or a full result set,
/// never a partial one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    Idle,
    Loading,
    Ready(Vec<JoinedBalance>),
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// Joined rows when the query has completed, `None` otherwise.
    pub fn results(&self) -> Option<&[JoinedBalance]> {
        match self {
            QueryState::Ready(rows) => Some(rows),
            _ => None,
        }
    }
}

/// Everything the presentation layer can observe, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub connection: ConnectionState,
    /// Active account address; empty when none is exposed.
    pub active_address: String,
    pub query: QueryState,
}

impl StateSnapshot {
    /// Whether a query could be submitted right now.
    ///
    /// An empty address (disconnected, or the wallet reported no accounts)
    /// means queries are no-ops, even if the connection flag still reads
    /// `Connected`.
    pub fn can_query(&self) -> bool {
        !self.active_address.is_empty()
    }
}

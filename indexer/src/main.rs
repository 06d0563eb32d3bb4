//! # Indexer CLI
//!
//! One-shot driver for the balance pipeline: take an address, fetch its
//! ERC-20 balances joined with token metadata, and print the result table.
//!
//! Wallet connectivity lives behind the `WalletProvider` capability and is
//! only available to embedders that supply a host wallet handle; this binary
//! covers the "submit query for an address" action.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use indexer::app::controller::QueryController;
use indexer::app::state::QueryState;
use indexer::config::Config;
use indexer::services::api::ApiClient;
use indexer::utils::format::format_balance;

/// Block-explorer base URL for contract links.
const ETHERSCAN: &str = "https://etherscan.io/address/";

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("indexer=info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let address = std::env::args()
        .nth(1)
        .ok_or_else(|| "usage: indexer <address>".to_string())?;

    let config = Config::from_env().map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;

    let api = Arc::new(ApiClient::new(&config));
    let controller = QueryController::new(api);

    controller.run_query(&address).await;

    match controller.query_state() {
        QueryState::Ready(rows) => {
            if rows.is_empty() {
                println!("no ERC-20 balances found for {}", address);
                return Ok(());
            }

            println!("ERC-20 token balances for {}:\n", address);
            for row in &rows {
                let symbol = row.metadata.symbol.as_deref().unwrap_or("UNKNOWN");
                let balance = match row.balance.token_balance.as_deref() {
                    Some(raw) => format_balance(raw, row.metadata.decimals),
                    None => "n/a".to_string(),
                };
                println!("  {:<12} {:>24}  {}{}", symbol, balance, ETHERSCAN, row.balance.contract_address);
            }
        }
        _ => {
            // A failed query leaves a dismissible notice behind
            let notice = controller
                .take_notice()
                .unwrap_or_else(|| "query did not complete".to_string());
            return Err(notice);
        }
    }

    Ok(())
}

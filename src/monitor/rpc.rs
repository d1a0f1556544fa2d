//! RPC client interactions

use std::str::FromStr;

use log::{debug, info};
use serde::Serialize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_signature::Signature;
use solana_transaction_status::UiTransactionEncoding;

use crate::errors::{ErrorExt, ParseError, ParseResult};
use crate::models::RawTransaction;

/// Get a confirmed transaction with its status metadata
pub async fn get_transaction(rpc_client: &RpcClient, signature: &str) -> ParseResult<RawTransaction> {
    let signature = Signature::from_str(signature).input_context("transaction signature")?;

    info!("Fetching transaction {} from {}", signature, rpc_client.url());

    let config = RpcTransactionConfig {
        encoding: Some(UiTransactionEncoding::JsonParsed),
        max_supported_transaction_version: Some(0),
        ..Default::default()
    };
    let response = rpc_client
        .get_transaction_with_config(&signature, config)
        .await
        .map_err(|e| ParseError::Rpc(format!("failed to fetch transaction {}: {}", signature, e)))?;

    to_raw_transaction(&response)
}

/// Re-read an RPC response as the parser's raw transaction model.
///
/// The client types serialize back to the same camelCase JSON the node
/// sent, which is what `RawTransaction` is modeled on.
pub fn to_raw_transaction<T: Serialize>(response: &T) -> ParseResult<RawTransaction> {
    let value = serde_json::to_value(response)?;
    let raw: RawTransaction = serde_json::from_value(value)
        .map_err(|e| ParseError::Rpc(format!("response is not a jsonParsed transaction: {}", e)))?;
    debug!(
        "Converted RPC response for slot {} ({} signatures)",
        raw.slot,
        raw.transaction.signatures.len()
    );
    Ok(raw)
}

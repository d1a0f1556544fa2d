//! A library for classifying Solana transactions into NFT activities
//!
//! Given a confirmed transaction and the mint under investigation, the parser
//! recognizes mints, marketplace listings, delistings and sales, and plain
//! token transfers by decoding the instructions of known programs. Anything
//! else is reported as an unknown activity.

pub mod constants;
pub mod errors;
pub mod models;
pub mod monitor;
pub mod parser;
pub mod utils;

use std::fs;
use std::path::Path;

use log::debug;

pub use crate::errors::{ParseError, ParseResult};
pub use crate::models::{Activity, ActivityKind, RawTransaction, Transaction, TransactionInput};
pub use crate::parser::{DecodeErrorPolicy, Parser, ParserConfig};

/// Classify a transaction with the default configuration.
///
/// A raw record needs `mint`; a built `Transaction` carries its own.
pub fn parse_transaction(
    input: impl Into<TransactionInput>,
    mint: Option<&str>,
) -> ParseResult<Activity> {
    Parser::default().parse_input(input, mint)
}

/// Load a raw `getTransaction` response saved as JSON.
///
/// Accepts either the bare result object or a full JSON-RPC envelope with
/// the record under `result`.
pub fn load_raw_transaction(path: &Path) -> ParseResult<RawTransaction> {
    let content = fs::read_to_string(path)?;
    let mut value: serde_json::Value = serde_json::from_str(&content)?;

    if let Some(result) = value.get_mut("result").map(serde_json::Value::take) {
        debug!("Unwrapping JSON-RPC envelope in {}", path.display());
        if result.is_null() {
            return Err(ParseError::input(format!(
                "{} holds an empty RPC result",
                path.display()
            )));
        }
        value = result;
    }

    Ok(serde_json::from_value(value)?)
}

/// Version of the NFT activity parser
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

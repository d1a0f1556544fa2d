//! Raw transaction record, as returned by `getTransaction` with the
//! `jsonParsed` encoding
//!
//! Only the fields the parser reads are modeled; everything else in the
//! response is ignored on deserialization.

use serde::{Serialize, Deserialize};
use serde_json::Value;

/// A confirmed transaction with its status metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    /// Slot the transaction was processed in
    pub slot: u64,
    /// Estimated production time, unix seconds. `null` for very old slots.
    #[serde(default)]
    pub block_time: Option<i64>,
    /// Signed transaction body
    pub transaction: RawTransactionBody,
    /// Status metadata
    #[serde(default)]
    pub meta: Option<RawMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionBody {
    #[serde(default)]
    pub signatures: Vec<String>,
    pub message: RawMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    #[serde(default)]
    pub account_keys: Vec<RawAccountKey>,
    /// Top-level instructions. Absent means the record is not a usable transaction.
    #[serde(default)]
    pub instructions: Option<Vec<RawInstruction>>,
}

/// Account key entry: an object in `jsonParsed`, a bare string in `json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAccountKey {
    Parsed {
        pubkey: String,
        #[serde(default)]
        signer: bool,
        #[serde(default)]
        writable: bool,
    },
    Plain(String),
}

impl RawAccountKey {
    pub fn pubkey(&self) -> &str {
        match self {
            RawAccountKey::Parsed { pubkey, .. } => pubkey,
            RawAccountKey::Plain(pubkey) => pubkey,
        }
    }
}

/// One instruction, either parsed by the node or partially decoded
///
/// Parsed instructions carry `program` and `parsed`; partially decoded ones
/// carry `accounts` and base58 `data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInstruction {
    pub program_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// `{ "type": ..., "info": {...} }` for most programs, a plain string for some (memo)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeta {
    #[serde(default)]
    pub err: Option<Value>,
    #[serde(default)]
    pub inner_instructions: Option<Vec<RawInnerInstructions>>,
    #[serde(default)]
    pub pre_token_balances: Option<Vec<RawTokenBalance>>,
    #[serde(default)]
    pub post_token_balances: Option<Vec<RawTokenBalance>>,
}

/// Instructions invoked by the outer instruction at `index`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInnerInstructions {
    pub index: usize,
    pub instructions: Vec<RawInstruction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenBalance {
    pub account_index: usize,
    pub mint: String,
    #[serde(default)]
    pub owner: Option<String>,
}

//! A single instruction of a transaction

use serde_json::{Map, Value};

use crate::errors::ParseResult;
use crate::models::raw::RawInstruction;
use crate::utils::bytes::decode_base58;

/// Instruction payload, kept both as received and decoded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionData {
    encoded: String,
    bytes: Vec<u8>,
}

impl InstructionData {
    /// Decode a base58 payload string.
    pub fn from_base58(encoded: &str) -> ParseResult<Self> {
        Ok(Self {
            encoded: encoded.to_string(),
            bytes: decode_base58(encoded)?,
        })
    }

    /// Wrap already decoded bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            encoded: bs58::encode(&bytes).into_string(),
            bytes,
        }
    }

    /// The base58 string as delivered by the node
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Instruction already decoded by the node (`parsed.type` / `parsed.info`)
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInfo {
    /// e.g. `mintTo`, `transferChecked`
    pub kind: String,
    pub info: Map<String, Value>,
}

impl ParsedInfo {
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let kind = object.get("type")?.as_str()?.to_string();
        let info = object
            .get("info")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Some(Self { kind, info })
    }

    /// String field of `info`, by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.info.get(name).and_then(Value::as_str)
    }
}

/// One instruction record
///
/// `accounts` keeps the order defined by the owning program; index N always
/// means the Nth account role of that instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    program_id: String,
    program: Option<String>,
    accounts: Vec<String>,
    data: InstructionData,
    parsed: Option<ParsedInfo>,
}

impl Instruction {
    pub fn new(program_id: impl Into<String>, accounts: Vec<String>, data: InstructionData) -> Self {
        Self {
            program_id: program_id.into(),
            program: None,
            accounts,
            data,
            parsed: None,
        }
    }

    /// Attach node-parsed fields, as the RPC does for token-program instructions.
    pub fn with_parsed(mut self, program: impl Into<String>, parsed: ParsedInfo) -> Self {
        self.program = Some(program.into());
        self.parsed = Some(parsed);
        self
    }

    pub(crate) fn from_raw(raw: &RawInstruction) -> ParseResult<Self> {
        let data = match raw.data.as_deref() {
            Some(encoded) => InstructionData::from_base58(encoded)?,
            None => InstructionData::default(),
        };

        Ok(Self {
            program_id: raw.program_id.clone(),
            program: raw.program.clone(),
            accounts: raw.accounts.clone(),
            data,
            parsed: raw.parsed.as_ref().and_then(ParsedInfo::from_value),
        })
    }

    pub fn program_id(&self) -> &str {
        &self.program_id
    }

    /// Program name reported by the node, e.g. `spl-token`
    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    /// Account at a fixed role index
    pub fn account(&self, index: usize) -> Option<&str> {
        self.accounts.get(index).map(String::as_str)
    }

    pub fn data(&self) -> &InstructionData {
        &self.data
    }

    pub fn parsed(&self) -> Option<&ParsedInfo> {
        self.parsed.as_ref()
    }
}

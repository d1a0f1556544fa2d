//! Transaction model handed to the detectors
//!
//! This is the only place that reads raw transaction fields. Detectors see
//! an immutable `Transaction` with the target mint attached.

use std::collections::HashMap;

use log::debug;

use crate::errors::{ParseError, ParseResult};
use crate::models::instruction::Instruction;
use crate::models::raw::{RawTokenBalance, RawTransaction};

/// Realized instruction tree of a transaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructionSet {
    /// Top-level instructions in program order
    pub outer: Vec<Instruction>,
    /// Instructions invoked by each outer instruction, keyed by outer index
    inner: HashMap<usize, Vec<Instruction>>,
}

impl InstructionSet {
    pub fn new(outer: Vec<Instruction>) -> Self {
        Self {
            outer,
            inner: HashMap::new(),
        }
    }

    /// Attach the inner instructions of the outer instruction at `index`.
    pub fn with_inner(mut self, index: usize, instructions: Vec<Instruction>) -> Self {
        self.inner.entry(index).or_default().extend(instructions);
        self
    }

    /// Inner instructions invoked by the outer instruction at `index`
    pub fn inner_of(&self, index: usize) -> &[Instruction] {
        self.inner.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All inner instructions, ordered by their outer instruction
    pub fn inner(&self) -> impl Iterator<Item = &Instruction> + '_ {
        (0..self.outer.len()).flat_map(move |index| self.inner_of(index).iter())
    }
}

/// Token account ownership as reported in the status metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    pub account: String,
    pub mint: String,
    pub owner: Option<String>,
}

/// A transaction under investigation for one mint
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: String,
    pub block_time: Option<i64>,
    pub slot: u64,
    pub mint: String,
    pub instructions: InstructionSet,
    pub account_keys: Vec<String>,
    pub token_balances: Vec<TokenBalance>,
}

impl Transaction {
    /// Build the model from a raw RPC record and the mint being investigated.
    pub fn new(raw: &RawTransaction, mint: &str) -> ParseResult<Self> {
        let mint = validate_mint(mint)?;

        let transaction_id = raw
            .transaction
            .signatures
            .first()
            .cloned()
            .ok_or_else(|| ParseError::input("raw transaction has no signatures"))?;

        let raw_outer = raw
            .transaction
            .message
            .instructions
            .as_ref()
            .ok_or_else(|| ParseError::input(format!(
                "raw transaction {} has no instruction list",
                transaction_id
            )))?;

        let outer = raw_outer
            .iter()
            .map(Instruction::from_raw)
            .collect::<ParseResult<Vec<_>>>()?;
        let mut instructions = InstructionSet::new(outer);

        let account_keys: Vec<String> = raw
            .transaction
            .message
            .account_keys
            .iter()
            .map(|key| key.pubkey().to_string())
            .collect();

        let mut token_balances = Vec::new();
        if let Some(meta) = &raw.meta {
            for group in meta.inner_instructions.iter().flatten() {
                let inner = group
                    .instructions
                    .iter()
                    .map(Instruction::from_raw)
                    .collect::<ParseResult<Vec<_>>>()?;
                instructions = instructions.with_inner(group.index, inner);
            }

            let balances = meta
                .post_token_balances
                .iter()
                .flatten()
                .chain(meta.pre_token_balances.iter().flatten());
            for balance in balances {
                if let Some(resolved) = resolve_balance(balance, &account_keys) {
                    if !token_balances.iter().any(|b: &TokenBalance| b.account == resolved.account) {
                        token_balances.push(resolved);
                    }
                }
            }
        }

        debug!(
            "Built transaction {} with {} outer instructions",
            transaction_id,
            instructions.outer.len()
        );

        Ok(Self {
            transaction_id,
            block_time: raw.block_time,
            slot: raw.slot,
            mint,
            instructions,
            account_keys,
            token_balances,
        })
    }

    /// Build a transaction directly from its parts.
    pub fn from_parts(
        transaction_id: impl Into<String>,
        block_time: Option<i64>,
        slot: u64,
        mint: &str,
        instructions: InstructionSet,
    ) -> ParseResult<Self> {
        Ok(Self {
            transaction_id: transaction_id.into(),
            block_time,
            slot,
            mint: validate_mint(mint)?,
            instructions,
            account_keys: Vec::new(),
            token_balances: Vec::new(),
        })
    }

    /// Attach token account ownership.
    pub fn with_token_balances(mut self, token_balances: Vec<TokenBalance>) -> Self {
        self.token_balances = token_balances;
        self
    }

    /// Token balance entry for a token account address
    pub fn token_balance(&self, account: &str) -> Option<&TokenBalance> {
        self.token_balances.iter().find(|balance| balance.account == account)
    }
}

fn validate_mint(mint: &str) -> ParseResult<String> {
    let mint = mint.trim();
    if mint.is_empty() {
        return Err(ParseError::input("mint must not be empty"));
    }
    Ok(mint.to_string())
}

fn resolve_balance(balance: &RawTokenBalance, account_keys: &[String]) -> Option<TokenBalance> {
    let account = account_keys.get(balance.account_index)?;
    Some(TokenBalance {
        account: account.clone(),
        mint: balance.mint.clone(),
        owner: balance.owner.clone(),
    })
}

/// What a caller may hand to the parser
#[derive(Debug, Clone)]
pub enum TransactionInput {
    /// A raw RPC record; needs an explicit mint.
    Raw(RawTransaction),
    /// An already built transaction, which carries its own mint.
    Built(Transaction),
}

impl TransactionInput {
    /// Resolve to a canonical `Transaction`.
    ///
    /// A built transaction keeps its own mint; an explicit mint must agree with it.
    pub fn resolve(self, mint: Option<&str>) -> ParseResult<Transaction> {
        match self {
            TransactionInput::Raw(raw) => {
                debug!("Received transaction as raw record");
                let mint = mint.ok_or_else(|| {
                    ParseError::input("did not receive a mint, only a raw transaction record")
                })?;
                Transaction::new(&raw, mint)
            }
            TransactionInput::Built(transaction) => {
                debug!("Received transaction as built Transaction");
                match mint {
                    Some(mint) if mint.trim() != transaction.mint => Err(ParseError::input(format!(
                        "mint {} does not match transaction mint {}",
                        mint, transaction.mint
                    ))),
                    _ => Ok(transaction),
                }
            }
        }
    }
}

impl From<RawTransaction> for TransactionInput {
    fn from(raw: RawTransaction) -> Self {
        TransactionInput::Raw(raw)
    }
}

impl From<Transaction> for TransactionInput {
    fn from(transaction: Transaction) -> Self {
        TransactionInput::Built(transaction)
    }
}

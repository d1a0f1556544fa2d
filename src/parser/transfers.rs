//! Transfer detection for plain token-program transfers

use log::debug;

use crate::constants::token::TRANSFER_TYPES;
use crate::errors::ParseResult;
use crate::models::{Activity, Instruction, ParsedInfo, Transaction, TransferActivity};
use crate::parser::matchers::is_token_program;
use crate::parser::{ActivityDetector, DecodeErrorPolicy, SubDetector};

const SUB_DETECTORS: &[SubDetector] = &[
    SubDetector { name: "TokenTransfer", detect: parse_token_transfer },
];

pub struct TransferDetector;

impl ActivityDetector for TransferDetector {
    fn name(&self) -> &'static str {
        "Transfer"
    }

    fn sub_detectors(&self) -> &'static [SubDetector] {
        SUB_DETECTORS
    }
}

/// Whether a parsed transfer moves `tx.mint`.
///
/// `transferChecked` names its mint; plain `transfer` only names token
/// accounts, whose mint comes from the token balances.
fn transfers_mint(tx: &Transaction, parsed: &ParsedInfo) -> bool {
    if let Some(mint) = parsed.field("mint") {
        return mint == tx.mint;
    }
    ["source", "destination"]
        .iter()
        .filter_map(|name| parsed.field(name))
        .filter_map(|account| tx.token_balance(account))
        .any(|balance| balance.mint == tx.mint)
}

fn build_transfer(tx: &Transaction, ix: &Instruction) -> Option<TransferActivity> {
    if !is_token_program(ix) {
        return None;
    }
    let parsed = ix.parsed()?;
    if !TRANSFER_TYPES.contains(&parsed.kind.as_str()) || !transfers_mint(tx, parsed) {
        return None;
    }

    let old_authority = parsed
        .field("authority")
        .or_else(|| parsed.field("multisigAuthority"))?;
    let old_token_account = parsed.field("source")?;
    let new_token_account = parsed.field("destination")?;

    Some(TransferActivity {
        header: tx.into(),
        old_authority: old_authority.to_string(),
        new_authority: tx
            .token_balance(new_token_account)
            .and_then(|balance| balance.owner.clone()),
        old_token_account: old_token_account.to_string(),
        new_token_account: new_token_account.to_string(),
    })
}

fn parse_token_transfer(tx: &Transaction, _policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    for ix in &tx.instructions.outer {
        if let Some(transfer) = build_transfer(tx, ix) {
            debug!("Is token transfer of {}", tx.mint);
            return Ok(Some(Activity::Transfer(transfer)));
        }
    }
    Ok(None)
}

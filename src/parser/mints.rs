//! Mint detection
//!
//! Token-program mint instructions arrive already parsed by the node, so
//! their fields are read by name. Candy Machine mints are recognized by the
//! program appearing anywhere in the transaction next to a mint-to of the
//! target mint.

use log::debug;

use crate::constants::metaplex::{CANDY_MACHINE_V1, CANDY_MACHINE_V2};
use crate::errors::ParseResult;
use crate::models::{Activity, Instruction, MintActivity, Transaction};
use crate::parser::matchers::{is_mint, is_program_id};
use crate::parser::{ActivityDetector, DecodeErrorPolicy, SubDetector};

const SUB_DETECTORS: &[SubDetector] = &[
    SubDetector { name: "CandyMachineV1", detect: parse_mint_candy_machine_v1 },
    SubDetector { name: "CandyMachineV2", detect: parse_mint_candy_machine_v2 },
    SubDetector { name: "OtherMint", detect: parse_mint_other },
];

pub struct MintDetector;

impl ActivityDetector for MintDetector {
    fn name(&self) -> &'static str {
        "Mint"
    }

    fn sub_detectors(&self) -> &'static [SubDetector] {
        SUB_DETECTORS
    }
}

/// First mint-to of `mint`, looking at outer instructions before inner ones.
fn find_mint_to<'a>(tx: &'a Transaction, mint: &str) -> Option<&'a Instruction> {
    tx.instructions
        .outer
        .iter()
        .find(|ix| is_mint(ix, mint))
        .or_else(|| tx.instructions.inner().find(|ix| is_mint(ix, mint)))
}

/// `(mintAuthority, account)` of a parsed mint-to.
fn mint_fields(ix: &Instruction) -> Option<(String, String)> {
    let parsed = ix.parsed()?;
    let authority = parsed
        .field("mintAuthority")
        .or_else(|| parsed.field("multisigMintAuthority"))?;
    let account = parsed.field("account")?;
    Some((authority.to_string(), account.to_string()))
}

fn build_mint(tx: &Transaction, ix: &Instruction, program: &str) -> Option<Activity> {
    let (new_authority, new_token_account) = mint_fields(ix)?;
    Some(Activity::Mint(MintActivity {
        header: tx.into(),
        new_authority,
        new_token_account,
        program: program.to_string(),
    }))
}

fn parse_mint_candy_machine(tx: &Transaction, program_id: &str, program: &str) -> Option<Activity> {
    let is_candy_machine = tx
        .instructions
        .outer
        .iter()
        .any(|ix| is_program_id(ix, program_id));
    if is_candy_machine {
        debug!("Program is {}", program);
    }

    let mint_to = find_mint_to(tx, &tx.mint);
    if mint_to.is_some() {
        debug!("Is correct mint tx");
    }

    match (is_candy_machine, mint_to) {
        (true, Some(ix)) => build_mint(tx, ix, program),
        _ => None,
    }
}

fn parse_mint_candy_machine_v1(tx: &Transaction, _policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    Ok(parse_mint_candy_machine(tx, CANDY_MACHINE_V1, "CandyMachineV1"))
}

fn parse_mint_candy_machine_v2(tx: &Transaction, _policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    Ok(parse_mint_candy_machine(tx, CANDY_MACHINE_V2, "CandyMachineV2"))
}

fn parse_mint_other(tx: &Transaction, _policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    Ok(find_mint_to(tx, &tx.mint).and_then(|ix| build_mint(tx, ix, ix.program_id())))
}

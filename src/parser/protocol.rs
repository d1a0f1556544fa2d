//! Uniform scan shared by every marketplace sub-detector
//!
//! A marketplace instruction is recognized by program id and discriminator,
//! then read at the fixed account positions its layout declares.

use log::{debug, warn};

use crate::constants::{InstructionLayout, Role};
use crate::errors::{ErrorContext, ParseError, ParseResult};
use crate::models::{Instruction, Transaction};
use crate::parser::matchers::{discriminator_matches, is_program_id};
use crate::parser::price::decode_price;
use crate::parser::DecodeErrorPolicy;

/// A marketplace instruction that matched a layout and has enough accounts
pub struct MatchedInstruction<'a> {
    pub ix: &'a Instruction,
    pub layout: &'a InstructionLayout,
}

impl<'a> MatchedInstruction<'a> {
    /// Address at the position declared for `role`.
    pub fn account(&self, role: Role) -> ParseResult<String> {
        self.layout
            .index_of(role)
            .and_then(|index| self.ix.account(index))
            .map(str::to_string)
            .ok_or_else(|| {
                ParseError::decode(
                    ErrorContext::new("marketplace_scan", "read_account_role")
                        .with_program(self.ix.program_id())
                        .with_details(self.layout.label),
                    format!("no account for role {:?}", role),
                )
            })
    }

    /// Old and new token account. Escrow-style layouts declare a single
    /// token account that is both.
    pub fn token_accounts(&self) -> ParseResult<(String, String)> {
        if self.layout.index_of(Role::TokenAccount).is_some() {
            let account = self.account(Role::TokenAccount)?;
            return Ok((account.clone(), account));
        }
        Ok((
            self.account(Role::OldTokenAccount)?,
            self.account(Role::NewTokenAccount)?,
        ))
    }

    pub fn price(&self) -> ParseResult<u64> {
        decode_price(self.ix.data().bytes(), self.ix.program_id())
    }
}

/// Scan outer instructions for the first one matching `layout` and build a
/// record from it.
///
/// Instructions with too few accounts are non-matches. A decode failure in
/// `build` is handled according to `policy`.
pub fn scan_marketplace<T>(
    tx: &Transaction,
    layout: &InstructionLayout,
    policy: DecodeErrorPolicy,
    build: impl Fn(&MatchedInstruction<'_>) -> ParseResult<T>,
) -> ParseResult<Option<T>> {
    let program_id = layout.marketplace.program_id();

    for (index, ix) in tx.instructions.outer.iter().enumerate() {
        if !is_program_id(ix, program_id) {
            continue;
        }
        debug!("Program is {}", layout.marketplace);

        if !discriminator_matches(ix, &layout.discriminator) {
            continue;
        }
        debug!("Is {} instruction", layout.label);

        if ix.accounts().len() < layout.min_accounts() {
            debug!(
                "Instruction #{} has {} accounts, {} needs {}",
                index,
                ix.accounts().len(),
                layout.label,
                layout.min_accounts()
            );
            continue;
        }

        match build(&MatchedInstruction { ix, layout }) {
            Ok(record) => return Ok(Some(record)),
            Err(err) if err.is_decode() && policy == DecodeErrorPolicy::SkipInstruction => {
                warn!(
                    "Skipping malformed {} instruction #{} in {}: {}",
                    layout.label, index, tx.transaction_id, err
                );
            }
            Err(err) => return Err(err),
        }
    }

    Ok(None)
}

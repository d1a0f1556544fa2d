//! Protocol matcher primitives

use crate::constants::discriminators::Discriminator;
use crate::constants::token::{MINT_TO_TYPES, TOKEN_PROGRAM_IDS};
use crate::models::Instruction;

/// Exact, case-sensitive program id comparison
pub fn is_program_id(ix: &Instruction, program_id: &str) -> bool {
    ix.program_id() == program_id
}

/// Whether the instruction belongs to the SPL token program (or Token-2022)
pub fn is_token_program(ix: &Instruction) -> bool {
    TOKEN_PROGRAM_IDS.iter().any(|id| is_program_id(ix, id))
}

/// True only for a node-parsed token `mintTo`/`mintToChecked` of `mint`
pub fn is_mint(ix: &Instruction, mint: &str) -> bool {
    if !is_token_program(ix) {
        return false;
    }
    match ix.parsed() {
        Some(parsed) => {
            MINT_TO_TYPES.contains(&parsed.kind.as_str()) && parsed.field("mint") == Some(mint)
        }
        None => false,
    }
}

/// Compare the leading units of the payload with a registry discriminator
pub fn discriminator_matches(ix: &Instruction, discriminator: &Discriminator) -> bool {
    match discriminator {
        Discriminator::EncodedPrefix(prefix) => ix.data().encoded().starts_with(prefix),
        Discriminator::Anchor { bytes, .. } => ix.data().bytes().starts_with(bytes),
    }
}

//! Instruction discriminators

use crate::utils::hash::generate_anchor_discriminator;

/// Namespace Anchor hashes instruction names under
pub const ANCHOR_DISCRIMINATOR_NAMESPACE: &str = "global";

/// Length in bytes of an Anchor instruction discriminator
pub const ANCHOR_DISCRIMINATOR_LEN: usize = 8;

/// Length in characters of an encoded-prefix discriminator
pub const ENCODED_DISCRIMINATOR_LEN: usize = 10;

/// How a registry entry recognizes one instruction of its program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discriminator {
    /// Leading characters of the base58 payload string, as observed on chain.
    EncodedPrefix(&'static str),
    /// Anchor sighash of the instruction name, compared against the decoded payload.
    Anchor {
        name: &'static str,
        bytes: [u8; ANCHOR_DISCRIMINATOR_LEN],
    },
}

impl Discriminator {
    /// Build the Anchor discriminator for a snake_case instruction name.
    pub fn anchor(name: &'static str) -> Self {
        Discriminator::Anchor {
            name,
            bytes: generate_anchor_discriminator(name),
        }
    }

    /// Number of units (characters or bytes) compared.
    pub fn len(&self) -> usize {
        match self {
            Discriminator::EncodedPrefix(prefix) => prefix.len(),
            Discriminator::Anchor { bytes, .. } => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

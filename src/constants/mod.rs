//! Protocol registry: program identifiers, discriminators, account-role
//! tables and price layouts of every supported marketplace version.
//!
//! Everything here is read-only data. Layouts that need a hash are built
//! lazily on first use and never change afterwards.

pub mod discriminators;
pub mod magic_eden;
pub mod metaplex;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::utils::bytes::Endian;
use self::discriminators::Discriminator;

/// A supported marketplace program version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marketplace {
    MagicEdenV1,
    MagicEdenV2,
}

impl Marketplace {
    pub const ALL: [Marketplace; 2] = [Marketplace::MagicEdenV1, Marketplace::MagicEdenV2];

    pub fn name(&self) -> &'static str {
        match self {
            Marketplace::MagicEdenV1 => "MagicEdenV1",
            Marketplace::MagicEdenV2 => "MagicEdenV2",
        }
    }

    pub fn program_id(&self) -> &'static str {
        match self {
            Marketplace::MagicEdenV1 => magic_eden::MAGIC_EDEN_V1_PROGRAM,
            Marketplace::MagicEdenV2 => magic_eden::MAGIC_EDEN_V2_PROGRAM,
        }
    }

    pub fn authority(&self) -> &'static str {
        match self {
            Marketplace::MagicEdenV1 => magic_eden::MAGIC_EDEN_V1_AUTHORITY,
            Marketplace::MagicEdenV2 => magic_eden::MAGIC_EDEN_V2_AUTHORITY,
        }
    }

    /// Where the price sits in this program's sale and listing payloads.
    pub fn price_layout(&self) -> PriceLayout {
        match self {
            // 8-byte discriminator, then the price
            Marketplace::MagicEdenV1 => PriceLayout {
                offset: 8,
                width: 8,
                endian: Endian::Little,
            },
            // 8-byte discriminator, two bump seeds, then the price
            Marketplace::MagicEdenV2 => PriceLayout {
                offset: 10,
                width: 8,
                endian: Endian::Little,
            },
        }
    }

    pub fn from_program_id(program_id: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|marketplace| marketplace.program_id() == program_id)
    }
}

impl std::fmt::Display for Marketplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position, width and byte order of an integer price field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLayout {
    pub offset: usize,
    pub width: usize,
    pub endian: Endian,
}

impl PriceLayout {
    /// Minimum payload length that contains the whole field.
    pub fn required_len(&self) -> usize {
        self.offset + self.width
    }
}

/// Meaning of an account position within a marketplace instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Buyer,
    Seller,
    /// Token account that is both source and destination (escrow-style programs).
    TokenAccount,
    OldTokenAccount,
    NewTokenAccount,
}

/// One recognizable instruction of a marketplace program.
#[derive(Debug, Clone)]
pub struct InstructionLayout {
    pub marketplace: Marketplace,
    /// Human-readable name used in logs.
    pub label: &'static str,
    pub discriminator: Discriminator,
    /// Fixed account positions, defined by the program's instruction format.
    pub roles: &'static [(Role, usize)],
}

impl InstructionLayout {
    /// Account index declared for `role`, if this instruction has that role.
    pub fn index_of(&self, role: Role) -> Option<usize> {
        self.roles
            .iter()
            .find(|(declared, _)| *declared == role)
            .map(|(_, index)| *index)
    }

    /// Smallest account list that holds every declared role.
    pub fn min_accounts(&self) -> usize {
        self.roles
            .iter()
            .map(|(_, index)| index + 1)
            .max()
            .unwrap_or(0)
    }
}

//! Magic Eden marketplace programs

use once_cell::sync::Lazy;

use super::discriminators::Discriminator;
use super::{InstructionLayout, Marketplace, Role};

pub const MAGIC_EDEN_V1_PROGRAM: &str = "MEisE1HzehtrDpAAT8PnLHjpSSkRYakotTuJRPjTpo8";
pub const MAGIC_EDEN_V1_AUTHORITY: &str = "GUfCR9mK6azb9vcpsxgXyj7XRPAKJd4KMHTTVvtncGgp";

pub const MAGIC_EDEN_V2_PROGRAM: &str = "M2mx93ekt1fmXSVkTrUL9xVFHkmME8HTUi5Cyc5aF7K";
pub const MAGIC_EDEN_V2_AUTHORITY: &str = "1BWutmTvYPwDtmw9abTkS4Ssr8no61spGAvW1X6NDix";

/// V1 moves authority over the buyer's token account, so old and new token
/// account are the same address.
pub static MAGIC_EDEN_V1_SALE: Lazy<InstructionLayout> = Lazy::new(|| InstructionLayout {
    marketplace: Marketplace::MagicEdenV1,
    label: "MagicEdenV1 Sale",
    discriminator: Discriminator::anchor("execute_sale"),
    roles: &[
        (Role::Buyer, 0),
        (Role::Seller, 1),
        (Role::TokenAccount, 2),
    ],
});

pub static MAGIC_EDEN_V1_ACCEPT_BID: Lazy<InstructionLayout> = Lazy::new(|| InstructionLayout {
    marketplace: Marketplace::MagicEdenV1,
    label: "MagicEdenV1 AcceptBid",
    discriminator: Discriminator::anchor("accept_bid"),
    roles: &[
        (Role::Seller, 0),
        (Role::Buyer, 1),
        (Role::TokenAccount, 2),
    ],
});

pub static MAGIC_EDEN_V1_DELISTING: Lazy<InstructionLayout> = Lazy::new(|| InstructionLayout {
    marketplace: Marketplace::MagicEdenV1,
    label: "MagicEdenV1 Delisting",
    discriminator: Discriminator::EncodedPrefix("TE6axTojnp"),
    roles: &[
        (Role::Seller, 0),
        (Role::TokenAccount, 1),
    ],
});

/// `executeSale`: bumps, price, token size, buyer and seller state expiry.
/// On chain the encoded payload starts with `d6iteQtSVr`.
pub static MAGIC_EDEN_V2_SALE: Lazy<InstructionLayout> = Lazy::new(|| InstructionLayout {
    marketplace: Marketplace::MagicEdenV2,
    label: "MagicEdenV2 Sale",
    discriminator: Discriminator::anchor("execute_sale"),
    roles: &[
        (Role::Buyer, 0),
        (Role::Seller, 1),
        (Role::OldTokenAccount, 3),
        (Role::NewTokenAccount, 7),
    ],
});

/// `sell`: bumps, price, token size, seller state expiry. Encoded as `2B3vSpRNKZ...`.
pub static MAGIC_EDEN_V2_LISTING: Lazy<InstructionLayout> = Lazy::new(|| InstructionLayout {
    marketplace: Marketplace::MagicEdenV2,
    label: "MagicEdenV2 Listing",
    discriminator: Discriminator::anchor("sell"),
    roles: &[
        (Role::Seller, 0),
        (Role::TokenAccount, 2),
    ],
});

pub static MAGIC_EDEN_V2_DELISTING: Lazy<InstructionLayout> = Lazy::new(|| InstructionLayout {
    marketplace: Marketplace::MagicEdenV2,
    label: "MagicEdenV2 Delisting",
    discriminator: Discriminator::EncodedPrefix("ENwHiaH9NA"),
    roles: &[
        (Role::Seller, 0),
        (Role::TokenAccount, 2),
    ],
});

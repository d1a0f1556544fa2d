//! Delisting detection

use crate::constants::magic_eden::{MAGIC_EDEN_V1_DELISTING, MAGIC_EDEN_V2_DELISTING};
use crate::constants::{InstructionLayout, Role};
use crate::errors::ParseResult;
use crate::models::{Activity, DelistingActivity, Transaction};
use crate::parser::protocol::scan_marketplace;
use crate::parser::{ActivityDetector, DecodeErrorPolicy, SubDetector};

/// Tried in declaration order.
const SUB_DETECTORS: &[SubDetector] = &[
    SubDetector { name: "MagicEdenV1 Delisting", detect: parse_delisting_mev1 },
    SubDetector { name: "MagicEdenV2 Delisting", detect: parse_delisting_mev2 },
];

pub struct DelistingDetector;

impl ActivityDetector for DelistingDetector {
    fn name(&self) -> &'static str {
        "Delisting"
    }

    fn sub_detectors(&self) -> &'static [SubDetector] {
        SUB_DETECTORS
    }
}

fn parse_delisting(
    tx: &Transaction,
    layout: &InstructionLayout,
    policy: DecodeErrorPolicy,
) -> ParseResult<Option<Activity>> {
    let delisting = scan_marketplace(tx, layout, policy, |matched| {
        Ok(DelistingActivity {
            header: tx.into(),
            seller: matched.account(Role::Seller)?,
            token_account: matched.account(Role::TokenAccount)?,
            marketplace: layout.marketplace,
        })
    })?;
    Ok(delisting.map(Activity::Delisting))
}

fn parse_delisting_mev1(tx: &Transaction, policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    parse_delisting(tx, &MAGIC_EDEN_V1_DELISTING, policy)
}

fn parse_delisting_mev2(tx: &Transaction, policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    parse_delisting(tx, &MAGIC_EDEN_V2_DELISTING, policy)
}

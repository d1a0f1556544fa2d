//! Listing detection

use crate::constants::magic_eden::MAGIC_EDEN_V2_LISTING;
use crate::constants::Role;
use crate::errors::ParseResult;
use crate::models::{Activity, ListingActivity, Transaction};
use crate::parser::protocol::scan_marketplace;
use crate::parser::{ActivityDetector, DecodeErrorPolicy, SubDetector};

const SUB_DETECTORS: &[SubDetector] = &[
    SubDetector { name: "MagicEdenV2 Listing", detect: parse_listing_mev2 },
];

pub struct ListingDetector;

impl ActivityDetector for ListingDetector {
    fn name(&self) -> &'static str {
        "Listing"
    }

    fn sub_detectors(&self) -> &'static [SubDetector] {
        SUB_DETECTORS
    }
}

fn parse_listing_mev2(tx: &Transaction, policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    let layout = &*MAGIC_EDEN_V2_LISTING;
    let listing = scan_marketplace(tx, layout, policy, |matched| {
        Ok(ListingActivity {
            header: tx.into(),
            seller: matched.account(Role::Seller)?,
            token_account: matched.account(Role::TokenAccount)?,
            price_lamports: matched.price()?,
            marketplace: layout.marketplace,
        })
    })?;
    Ok(listing.map(Activity::Listing))
}

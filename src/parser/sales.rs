//! Sale detection

use crate::constants::magic_eden::{MAGIC_EDEN_V1_ACCEPT_BID, MAGIC_EDEN_V1_SALE, MAGIC_EDEN_V2_SALE};
use crate::constants::{InstructionLayout, Role};
use crate::errors::ParseResult;
use crate::models::{Activity, SaleActivity, Transaction};
use crate::parser::protocol::scan_marketplace;
use crate::parser::{ActivityDetector, DecodeErrorPolicy, SubDetector};

/// Tried in declaration order.
const SUB_DETECTORS: &[SubDetector] = &[
    SubDetector { name: "MagicEdenV1 Sale", detect: parse_sale_mev1 },
    SubDetector { name: "MagicEdenV1 AcceptBid", detect: parse_accept_bid_mev1 },
    SubDetector { name: "MagicEdenV2 Sale", detect: parse_sale_mev2 },
    SubDetector { name: "AuctionHouse", detect: parse_sale_auction_house },
    SubDetector { name: "DigitalEyes", detect: parse_sale_digital_eyes },
];

pub struct SaleDetector;

impl ActivityDetector for SaleDetector {
    fn name(&self) -> &'static str {
        "Sale"
    }

    fn sub_detectors(&self) -> &'static [SubDetector] {
        SUB_DETECTORS
    }
}

fn parse_sale(
    tx: &Transaction,
    layout: &InstructionLayout,
    policy: DecodeErrorPolicy,
) -> ParseResult<Option<Activity>> {
    let sale = scan_marketplace(tx, layout, policy, |matched| {
        let (old_token_account, new_token_account) = matched.token_accounts()?;
        Ok(SaleActivity {
            header: tx.into(),
            buyer: matched.account(Role::Buyer)?,
            seller: matched.account(Role::Seller)?,
            new_token_account,
            old_token_account,
            price_lamports: matched.price()?,
            marketplace: layout.marketplace,
        })
    })?;
    Ok(sale.map(Activity::Sale))
}

fn parse_sale_mev1(tx: &Transaction, policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    parse_sale(tx, &MAGIC_EDEN_V1_SALE, policy)
}

fn parse_accept_bid_mev1(tx: &Transaction, policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    parse_sale(tx, &MAGIC_EDEN_V1_ACCEPT_BID, policy)
}

fn parse_sale_mev2(tx: &Transaction, policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    parse_sale(tx, &MAGIC_EDEN_V2_SALE, policy)
}

// TODO: Metaplex Auction House executeSale, once its price layout is in the registry
fn parse_sale_auction_house(_tx: &Transaction, _policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    Ok(None)
}

fn parse_sale_digital_eyes(_tx: &Transaction, _policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
    Ok(None)
}

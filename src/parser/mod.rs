//! Activity classification
//!
//! The `Parser` tries each activity detector in a fixed priority order and
//! returns the first match. Each detector in turn tries its protocol
//! sub-detectors in declaration order. A transaction nothing recognizes
//! becomes an `UnknownActivity`.

mod delistings;
mod listings;
pub mod matchers;
mod mints;
pub mod price;
pub mod protocol;
mod sales;
mod transfers;

use log::{debug, info, warn};

use crate::errors::ParseResult;
use crate::models::{Activity, Transaction, TransactionInput};

pub use self::delistings::DelistingDetector;
pub use self::listings::ListingDetector;
pub use self::mints::MintDetector;
pub use self::sales::SaleDetector;
pub use self::transfers::TransferDetector;

/// What to do when a recognized instruction has a malformed payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeErrorPolicy {
    /// Skip the instruction and keep scanning.
    #[default]
    SkipInstruction,
    /// Stop the whole chain; the transaction classifies as unknown.
    AbortChain,
}

/// Parser configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserConfig {
    pub decode_error_policy: DecodeErrorPolicy,
}

/// One protocol-version detector inside an activity detector
pub struct SubDetector {
    pub name: &'static str,
    pub detect: fn(&Transaction, DecodeErrorPolicy) -> ParseResult<Option<Activity>>,
}

/// Detects one kind of activity
pub trait ActivityDetector: Send + Sync {
    fn name(&self) -> &'static str;

    /// Protocol sub-detectors, in the order they are tried
    fn sub_detectors(&self) -> &'static [SubDetector];

    /// Return the first sub-detector match.
    fn detect(&self, tx: &Transaction, policy: DecodeErrorPolicy) -> ParseResult<Option<Activity>> {
        for sub in self.sub_detectors() {
            debug!("Checking {} {}", self.name(), sub.name);
            if let Some(activity) = (sub.detect)(tx, policy)? {
                return Ok(Some(activity));
            }
        }
        Ok(None)
    }
}

/// Detector priority. A transaction matching several patterns takes the first.
pub const DETECTORS: &[&dyn ActivityDetector] = &[
    &ListingDetector,
    &DelistingDetector,
    &SaleDetector,
    &MintDetector,
    &TransferDetector,
];

/// Classifies transactions into activities
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Classify a transaction. Never fails: no match yields `UnknownActivity`.
    pub fn parse(&self, tx: &Transaction) -> Activity {
        info!("Parsing transaction {}", tx.transaction_id);

        for detector in DETECTORS {
            debug!("Check if transaction is '{}'", detector.name());
            match detector.detect(tx, self.config.decode_error_policy) {
                Ok(Some(activity)) => {
                    info!("Transaction {} is a {}", tx.transaction_id, detector.name());
                    return activity;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!("Aborting classification of {}: {}", tx.transaction_id, err);
                    return Activity::unknown(tx);
                }
            }
        }

        debug!("Unknown transaction type");
        Activity::unknown(tx)
    }

    /// Resolve caller input into a transaction, then classify it.
    pub fn parse_input(
        &self,
        input: impl Into<TransactionInput>,
        mint: Option<&str>,
    ) -> ParseResult<Activity> {
        let tx = input.into().resolve(mint)?;
        Ok(self.parse(&tx))
    }
}

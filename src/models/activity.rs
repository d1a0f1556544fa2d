//! Activity records produced by classification

use serde::{Serialize, Deserialize};

use crate::constants::Marketplace;
use crate::models::transaction::Transaction;

/// Fields shared by every activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHeader {
    pub transaction_id: String,
    pub block_time: Option<i64>,
    pub slot: u64,
    pub mint: String,
}

impl From<&Transaction> for ActivityHeader {
    fn from(tx: &Transaction) -> Self {
        Self {
            transaction_id: tx.transaction_id.clone(),
            block_time: tx.block_time,
            slot: tx.slot,
            mint: tx.mint.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintActivity {
    #[serde(flatten)]
    pub header: ActivityHeader,
    pub new_authority: String,
    pub new_token_account: String,
    /// Minting program recognized, e.g. `CandyMachineV2`, or the token program id
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingActivity {
    #[serde(flatten)]
    pub header: ActivityHeader,
    pub seller: String,
    pub token_account: String,
    pub price_lamports: u64,
    pub marketplace: Marketplace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelistingActivity {
    #[serde(flatten)]
    pub header: ActivityHeader,
    pub seller: String,
    pub token_account: String,
    pub marketplace: Marketplace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleActivity {
    #[serde(flatten)]
    pub header: ActivityHeader,
    pub buyer: String,
    pub seller: String,
    pub new_token_account: String,
    pub old_token_account: String,
    pub price_lamports: u64,
    pub marketplace: Marketplace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferActivity {
    #[serde(flatten)]
    pub header: ActivityHeader,
    pub old_authority: String,
    /// Owner of the destination account, when the status metadata reports it
    pub new_authority: Option<String>,
    pub old_token_account: String,
    pub new_token_account: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownActivity {
    #[serde(flatten)]
    pub header: ActivityHeader,
}

/// Classification result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Activity {
    Mint(MintActivity),
    Listing(ListingActivity),
    Delisting(DelistingActivity),
    Sale(SaleActivity),
    Transfer(TransferActivity),
    Unknown(UnknownActivity),
}

/// Activity variant without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Mint,
    Listing,
    Delisting,
    Sale,
    Transfer,
    Unknown,
}

impl Activity {
    pub fn unknown(tx: &Transaction) -> Self {
        Activity::Unknown(UnknownActivity { header: tx.into() })
    }

    pub fn header(&self) -> &ActivityHeader {
        match self {
            Activity::Mint(a) => &a.header,
            Activity::Listing(a) => &a.header,
            Activity::Delisting(a) => &a.header,
            Activity::Sale(a) => &a.header,
            Activity::Transfer(a) => &a.header,
            Activity::Unknown(a) => &a.header,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Mint(_) => ActivityKind::Mint,
            Activity::Listing(_) => ActivityKind::Listing,
            Activity::Delisting(_) => ActivityKind::Delisting,
            Activity::Sale(_) => ActivityKind::Sale,
            Activity::Transfer(_) => ActivityKind::Transfer,
            Activity::Unknown(_) => ActivityKind::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Activity::Unknown(_))
    }
}

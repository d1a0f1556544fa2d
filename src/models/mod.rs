//! Data models: raw RPC records, the transaction model and activity records

pub mod activity;
pub mod instruction;
pub mod raw;
pub mod transaction;
#[cfg(test)]
mod tests;

pub use self::activity::{
    Activity, ActivityHeader, ActivityKind, DelistingActivity, ListingActivity, MintActivity,
    SaleActivity, TransferActivity, UnknownActivity,
};
pub use self::instruction::{Instruction, InstructionData, ParsedInfo};
pub use self::raw::RawTransaction;
pub use self::transaction::{InstructionSet, TokenBalance, Transaction, TransactionInput};

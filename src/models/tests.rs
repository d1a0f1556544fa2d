use serde_json::json;

use super::*;
use crate::errors::ParseError;

const MINT: &str = "Bvn2AsrHX2g2SVH3ByRRhK2qbCDeH1jUmJSWVPzrob5Q";

fn raw_json() -> serde_json::Value {
    json!({
        "slot": 118_000_123u64,
        "blockTime": 1_641_000_000i64,
        "transaction": {
            "signatures": ["5g1CLoBX3RYR2YPqGZ3oP7YCN63V68SFm1WF6rTQ12Wf"],
            "message": {
                "accountKeys": [
                    { "pubkey": "FXA2iPDdHL7cR74vxBb7AgHpqzGFxY9rYXVfqNczZYmF", "signer": true, "writable": true, "source": "transaction" },
                    { "pubkey": "BPwzfbHv3JW98kZ3HPJTardvD9pbuD9dVGtoLxiysfk6", "signer": false, "writable": true, "source": "transaction" }
                ],
                "instructions": [
                    {
                        "programId": "M2mx93ekt1fmXSVkTrUL9xVFHkmME8HTUi5Cyc5aF7K",
                        "accounts": ["A", "B", "C"],
                        "data": bs58::encode([1u8, 2, 3, 4]).into_string()
                    },
                    {
                        "program": "spl-token",
                        "programId": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
                        "parsed": {
                            "type": "mintTo",
                            "info": { "mint": MINT, "account": "Acc", "mintAuthority": "Auth", "amount": "1" }
                        }
                    },
                    {
                        "program": "spl-memo",
                        "programId": "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr",
                        "parsed": "hello"
                    }
                ]
            }
        },
        "meta": {
            "err": null,
            "innerInstructions": [
                {
                    "index": 0,
                    "instructions": [
                        { "programId": "11111111111111111111111111111111", "accounts": ["X", "Y"], "data": "3Bxs4h24hBtQy9rw" }
                    ]
                }
            ],
            "preTokenBalances": [],
            "postTokenBalances": [
                { "accountIndex": 1, "mint": MINT, "owner": "FXA2iPDdHL7cR74vxBb7AgHpqzGFxY9rYXVfqNczZYmF", "uiTokenAmount": { "amount": "1" } }
            ]
        }
    })
}

fn raw() -> RawTransaction {
    serde_json::from_value(raw_json()).unwrap()
}

#[test]
fn test_transaction_from_raw() {
    let tx = Transaction::new(&raw(), MINT).unwrap();

    assert_eq!(tx.transaction_id, "5g1CLoBX3RYR2YPqGZ3oP7YCN63V68SFm1WF6rTQ12Wf");
    assert_eq!(tx.block_time, Some(1_641_000_000));
    assert_eq!(tx.slot, 118_000_123);
    assert_eq!(tx.mint, MINT);
    assert_eq!(tx.instructions.outer.len(), 3);

    let first = &tx.instructions.outer[0];
    assert_eq!(first.program_id(), "M2mx93ekt1fmXSVkTrUL9xVFHkmME8HTUi5Cyc5aF7K");
    assert_eq!(first.accounts(), &["A", "B", "C"]);
    assert_eq!(first.data().bytes(), &[1, 2, 3, 4]);
    assert!(first.parsed().is_none());

    let mint_to = &tx.instructions.outer[1];
    assert_eq!(mint_to.program(), Some("spl-token"));
    let parsed = mint_to.parsed().unwrap();
    assert_eq!(parsed.kind, "mintTo");
    assert_eq!(parsed.field("mintAuthority"), Some("Auth"));
    assert!(mint_to.data().is_empty());

    // memo's `parsed` is a bare string and carries no fields
    assert!(tx.instructions.outer[2].parsed().is_none());

    assert_eq!(tx.instructions.inner_of(0).len(), 1);
    assert!(tx.instructions.inner_of(1).is_empty());
    assert_eq!(tx.instructions.inner().count(), 1);

    let balance = tx.token_balance("BPwzfbHv3JW98kZ3HPJTardvD9pbuD9dVGtoLxiysfk6").unwrap();
    assert_eq!(balance.mint, MINT);
    assert_eq!(balance.owner.as_deref(), Some("FXA2iPDdHL7cR74vxBb7AgHpqzGFxY9rYXVfqNczZYmF"));
}

#[test]
fn test_account_order_is_preserved() {
    let mut value = raw_json();
    value["transaction"]["message"]["instructions"][0]["accounts"] = json!(["C", "A", "C", "B"]);
    let raw: RawTransaction = serde_json::from_value(value).unwrap();

    let tx = Transaction::new(&raw, MINT).unwrap();
    assert_eq!(tx.instructions.outer[0].accounts(), &["C", "A", "C", "B"]);
    assert_eq!(tx.instructions.outer[0].account(3), Some("B"));
    assert_eq!(tx.instructions.outer[0].account(4), None);
}

#[test]
fn test_transaction_requires_mint() {
    let err = Transaction::new(&raw(), "  ").unwrap_err();
    assert!(matches!(err, ParseError::Input(_)));
}

#[test]
fn test_transaction_requires_instruction_list() {
    let mut value = raw_json();
    value["transaction"]["message"]
        .as_object_mut()
        .unwrap()
        .remove("instructions");
    let raw: RawTransaction = serde_json::from_value(value).unwrap();

    let err = Transaction::new(&raw, MINT).unwrap_err();
    assert!(matches!(err, ParseError::Input(_)));
    assert!(err.to_string().contains("no instruction list"));
}

#[test]
fn test_transaction_rejects_invalid_payload() {
    let mut value = raw_json();
    value["transaction"]["message"]["instructions"][0]["data"] = json!("not-base58-0OIl");
    let raw: RawTransaction = serde_json::from_value(value).unwrap();

    assert!(matches!(Transaction::new(&raw, MINT), Err(ParseError::Input(_))));
}

#[test]
fn test_plain_account_keys() {
    let mut value = raw_json();
    value["transaction"]["message"]["accountKeys"] = json!(["K1", "K2"]);
    let raw: RawTransaction = serde_json::from_value(value).unwrap();

    let tx = Transaction::new(&raw, MINT).unwrap();
    assert_eq!(tx.account_keys, vec!["K1".to_string(), "K2".to_string()]);
    assert_eq!(tx.token_balance("K2").map(|b| b.mint.as_str()), Some(MINT));
}

#[test]
fn test_input_resolution() {
    // raw record without mint
    let err = TransactionInput::Raw(raw()).resolve(None).unwrap_err();
    assert!(matches!(err, ParseError::Input(_)));

    // raw record with mint
    let tx = TransactionInput::from(raw()).resolve(Some(MINT)).unwrap();
    assert_eq!(tx.mint, MINT);

    // built transaction carries its own mint
    let built = TransactionInput::Built(tx.clone()).resolve(None).unwrap();
    assert_eq!(built, tx);

    // agreeing explicit mint
    assert!(TransactionInput::from(tx.clone()).resolve(Some(MINT)).is_ok());

    // conflicting explicit mint
    let err = TransactionInput::from(tx).resolve(Some("OtherMint")).unwrap_err();
    assert!(err.to_string().contains("does not match"));
}

#[test]
fn test_activity_serialization() {
    let tx = Transaction::new(&raw(), MINT).unwrap();
    let activity = Activity::unknown(&tx);

    assert!(activity.is_unknown());
    assert_eq!(activity.kind(), ActivityKind::Unknown);
    assert_eq!(activity.header().slot, 118_000_123);

    let value = serde_json::to_value(&activity).unwrap();
    assert_eq!(value["type"], "Unknown");
    assert_eq!(value["mint"], MINT);
    assert_eq!(value.as_object().unwrap().len(), 5);

    let back: Activity = serde_json::from_value(value).unwrap();
    assert_eq!(back, activity);
}

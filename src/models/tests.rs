#![allow(clippy::unwrap_used)]

use super::*;

fn make_txn(amount: f64) -> Transaction {
    Transaction {
        category: "Test".into(),
        amount,
    }
}

#[test]
fn test_refund() {
    assert!(make_txn(-50.0).is_refund());
    assert!(!make_txn(100.0).is_refund());
    assert!(!make_txn(0.0).is_refund());
}

#[test]
fn test_abs_amount() {
    assert_eq!(make_txn(-42.99).abs_amount(), 42.99);
    assert_eq!(make_txn(42.99).abs_amount(), 42.99);
    assert_eq!(make_txn(0.0).abs_amount(), 0.0);
}

#[test]
fn test_small_amounts() {
    let txn = make_txn(0.01);
    assert!(!txn.is_refund());
    assert_eq!(txn.abs_amount(), 0.01);

    let txn = make_txn(-0.01);
    assert!(txn.is_refund());
    assert_eq!(txn.abs_amount(), 0.01);
}

#[test]
fn test_display() {
    let txn = Transaction {
        category: "Food".into(),
        amount: 12.5,
    };
    assert_eq!(format!("{txn}"), "Category: Food, Amount: 12.5");
}

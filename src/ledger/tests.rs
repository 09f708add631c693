#![allow(clippy::unwrap_used)]

use super::*;

// ── Income ────────────────────────────────────────────────────

#[test]
fn test_new_ledger_is_empty() {
    let ledger = Ledger::new();
    assert_eq!(ledger.income(), 0.0);
    assert_eq!(ledger.total_spent(), 0.0);
    assert!(ledger.transactions().is_empty());
    assert!(ledger.categories().is_empty());
}

#[test]
fn test_set_income_replaces_value() {
    let mut ledger = Ledger::new();
    ledger.set_income(1000.0);
    assert_eq!(ledger.income(), 1000.0);
    ledger.set_income(250.5);
    assert_eq!(ledger.income(), 250.5);
}

#[test]
fn test_set_income_accepts_negative() {
    // No sign constraint; callers pre-validate input shape, not meaning.
    let mut ledger = Ledger::new();
    ledger.set_income(-100.0);
    assert_eq!(ledger.income(), -100.0);
}

#[test]
fn test_lowering_income_does_not_revalidate() {
    let mut ledger = Ledger::new();
    ledger.set_income(100.0);
    ledger.add_transaction("Food", 50.0).unwrap();
    ledger.set_income(0.0);
    assert_eq!(ledger.income(), 0.0);
    assert_eq!(ledger.total_spent(), 50.0);
    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.headroom(), -50.0);
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_add_transaction_within_income() {
    let mut ledger = Ledger::new();
    ledger.set_income(1000.0);
    assert!(ledger.add_transaction("Food", 300.0).is_ok());
    assert_eq!(ledger.total_spent(), 300.0);
    assert_eq!(ledger.transactions()[0].category, "Food");
    assert_eq!(ledger.transactions()[0].amount, 300.0);
}

#[test]
fn test_add_transaction_over_income_rejected() {
    let mut ledger = Ledger::new();
    ledger.set_income(100.0);
    let err = ledger.add_transaction("Food", 100.01).unwrap_err();
    assert_eq!(err, LedgerError::SpendingExceedsIncome);
    assert!(ledger.transactions().is_empty());
    assert_eq!(ledger.total_spent(), 0.0);
}

#[test]
fn test_rejection_message() {
    assert_eq!(
        LedgerError::SpendingExceedsIncome.to_string(),
        "transaction amount cannot exceed income"
    );
}

#[test]
fn test_boundary_exact_income_accepted() {
    let mut ledger = Ledger::new();
    ledger.set_income(100.0);
    ledger.add_transaction("Housing", 100.0).unwrap();
    assert_eq!(ledger.total_spent(), 100.0);

    // Headroom is exactly zero now: a zero-amount transaction still fits,
    // the smallest positive amount does not.
    assert!(ledger.add_transaction("Food", 0.0).is_ok());
    assert_eq!(
        ledger.add_transaction("Food", 0.01),
        Err(LedgerError::SpendingExceedsIncome)
    );
    assert_eq!(ledger.total_spent(), 100.0);
    assert_eq!(ledger.transactions().len(), 2);
}

#[test]
fn test_zero_income_rejects_any_positive_amount() {
    let mut ledger = Ledger::new();
    assert!(ledger.add_transaction("Food", 0.01).is_err());
    assert!(ledger.add_transaction("Food", 0.0).is_ok());
}

#[test]
fn test_negative_amount_accepted_and_widens_headroom() {
    let mut ledger = Ledger::new();
    ledger.set_income(100.0);
    ledger.add_transaction("Housing", 100.0).unwrap();
    assert_eq!(ledger.headroom(), 0.0);

    // A refund-shaped entry is not rejected by the over-income check.
    ledger.add_transaction("Other", -30.0).unwrap();
    assert_eq!(ledger.total_spent(), 70.0);
    assert_eq!(ledger.headroom(), 30.0);
    assert!(ledger.add_transaction("Food", 30.0).is_ok());
}

#[test]
fn test_empty_and_unregistered_categories_accepted() {
    let mut ledger = Ledger::new();
    ledger.set_income(50.0);
    assert!(ledger.add_transaction("", 10.0).is_ok());
    assert!(ledger.add_transaction("Never Registered", 10.0).is_ok());
    assert!(ledger.categories().is_empty());
}

#[test]
fn test_transactions_keep_insertion_order() {
    let mut ledger = Ledger::new();
    ledger.set_income(100.0);
    ledger.add_transaction("Food", 10.0).unwrap();
    ledger.add_transaction("Transport", 20.0).unwrap();
    ledger.add_transaction("Food", 30.0).unwrap();
    let cats: Vec<&str> = ledger
        .transactions()
        .iter()
        .map(|t| t.category.as_str())
        .collect();
    assert_eq!(cats, vec!["Food", "Transport", "Food"]);
}

#[test]
fn test_total_is_sum_in_append_order() {
    let mut ledger = Ledger::new();
    ledger.set_income(1000.0);
    let amounts = [12.5, 0.0, 99.99, 3.0];
    for (i, amt) in amounts.iter().enumerate() {
        ledger.add_transaction(&format!("cat{i}"), *amt).unwrap();
    }
    assert_eq!(ledger.total_spent(), amounts.iter().sum::<f64>());
}

#[test]
fn test_scenario_accept_reject_accept() {
    let mut ledger = Ledger::new();
    ledger.set_income(1000.0);

    assert!(ledger.add_transaction("Food", 300.0).is_ok());
    assert_eq!(ledger.total_spent(), 300.0);

    // 300 + 800 > 1000, rejected, total unchanged
    assert!(ledger.add_transaction("Transport", 800.0).is_err());
    assert_eq!(ledger.total_spent(), 300.0);

    // 300 + 700 == 1000, accepted
    assert!(ledger.add_transaction("Transport", 700.0).is_ok());
    assert_eq!(ledger.total_spent(), 1000.0);
    assert_eq!(ledger.transactions().len(), 2);
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_add_category() {
    let mut ledger = Ledger::new();
    ledger.add_category("Food");
    assert_eq!(ledger.categories(), ["Food".to_string()]);
}

#[test]
fn test_add_category_is_idempotent() {
    let mut ledger = Ledger::new();
    ledger.add_category("Food");
    ledger.add_category("Food");
    assert_eq!(ledger.categories(), ["Food".to_string()]);
}

#[test]
fn test_categories_keep_insertion_order() {
    let mut ledger = Ledger::new();
    ledger.add_category("Transport");
    ledger.add_category("Food");
    ledger.add_category("Transport");
    ledger.add_category("Housing");
    let cats: Vec<&str> = ledger.categories().iter().map(String::as_str).collect();
    assert_eq!(cats, vec!["Transport", "Food", "Housing"]);
}

#[test]
fn test_category_match_is_exact() {
    // Membership is exact string equality, not case-insensitive.
    let mut ledger = Ledger::new();
    ledger.add_category("Food");
    ledger.add_category("food");
    assert_eq!(ledger.categories().len(), 2);
}

#[test]
fn test_no_category_names_are_special_cased() {
    // Dedup is the whole contract; no hardcoded name is rejected.
    let mut ledger = Ledger::new();
    ledger.add_category("General");
    ledger.add_category("Single");
    assert_eq!(ledger.categories().len(), 2);
}

use thiserror::Error;

use crate::models::Transaction;

/// Business-rule rejections raised by the ledger. These are values the
/// caller inspects, never fatal conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("transaction amount cannot exceed income")]
    SpendingExceedsIncome,
}

/// The bookkeeping core: declared income, the append-only transaction
/// sequence, and the user-curated category registry.
///
/// Lives entirely in memory for the process lifetime. The presentation
/// layer holds one instance and renders whatever these methods return;
/// no business decision is made outside this type.
#[derive(Debug, Default)]
pub struct Ledger {
    income: f64,
    transactions: Vec<Transaction>,
    categories: Vec<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the declared income unconditionally.
    ///
    /// Existing transactions are not re-validated against the new value:
    /// lowering income below the amount already spent leaves the ledger
    /// at negative headroom, which is accepted behavior.
    pub fn set_income(&mut self, income: f64) {
        self.income = income;
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    /// Record a transaction, unless it would push total spending past the
    /// declared income.
    ///
    /// The check is strict: a transaction that lands the total exactly on
    /// the income is accepted; one that exceeds it by any positive amount
    /// is rejected and nothing is appended. The category string is taken
    /// as-is (empty and unregistered names are legal), and negative
    /// amounts pass the check trivially since they only widen headroom.
    pub fn add_transaction(&mut self, category: &str, amount: f64) -> Result<(), LedgerError> {
        let total_spent = self.total_spent();
        if total_spent + amount > self.income {
            return Err(LedgerError::SpendingExceedsIncome);
        }
        self.transactions.push(Transaction {
            category: category.to_string(),
            amount,
        });
        Ok(())
    }

    /// Sum of all recorded amounts, recomputed from the full sequence.
    pub fn total_spent(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Income minus total spent: how much can still be recorded before
    /// `add_transaction` starts rejecting.
    pub fn headroom(&self) -> f64 {
        self.income - self.total_spent()
    }

    /// All recorded transactions, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Register a category name. Duplicates (exact string match) are a
    /// silent no-op, so repeated registration is idempotent.
    pub fn add_category(&mut self, category: &str) {
        if !self.categories.iter().any(|c| c == category) {
            self.categories.push(category.to_string());
        }
    }

    /// Registered categories, in insertion order. Independent of the
    /// categories actually used by recorded transactions.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

#[cfg(test)]
mod tests;

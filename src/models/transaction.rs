/// A recorded expense: a category name and an amount. Created by the
/// ledger when a transaction is accepted and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub category: String,
    pub amount: f64,
}

impl Transaction {
    /// Negative amounts act as refunds: they reduce the running total.
    pub fn is_refund(&self) -> bool {
        self.amount < 0.0
    }

    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category: {}, Amount: {}", self.category, self.amount)
    }
}

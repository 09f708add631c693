mod transaction;

pub use transaction::Transaction;

#[cfg(test)]
mod tests;

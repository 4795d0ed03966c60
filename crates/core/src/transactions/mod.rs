//! Transactions module - the savings-relevant slice of the ledger.

mod transactions_model;

pub use transactions_model::{total_deposits, transactions_for_goal, SavingsTransaction};

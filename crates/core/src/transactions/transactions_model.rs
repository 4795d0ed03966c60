//! Savings transaction model and goal scoping.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::SavingsGoal;

/// A dated monetary movement in the savings category.
///
/// `amount` keeps the ledger's sign (outflows are negative). Every calculation
/// treats savings transactions as deposits and uses the absolute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsTransaction {
    pub id: Option<String>,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub goal_id: Option<String>,
}

impl SavingsTransaction {
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        SavingsTransaction {
            id: None,
            date,
            amount,
            goal_id: None,
        }
    }

    pub fn for_goal(mut self, goal_id: impl Into<String>) -> Self {
        self.goal_id = Some(goal_id.into());
        self
    }

    /// Deposit value of the transaction
    pub fn deposit(&self) -> Decimal {
        self.amount.abs()
    }
}

/// Sum of the absolute amounts of `transactions`, saturating at `Decimal::MAX`.
pub fn total_deposits(transactions: &[SavingsTransaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |total, t| total.saturating_add(t.deposit()))
}

/// Transactions that count toward `goal` as of `as_of`.
///
/// Transactions linked to the goal are always included. Unlinked transactions
/// are bucketed by date instead: they count when they fall inside the goal's
/// window, from its period start through its period end (or `as_of` when the
/// end is unset or later). Transactions linked to another goal never count.
pub fn transactions_for_goal(
    goal: &SavingsGoal,
    transactions: &[SavingsTransaction],
    as_of: NaiveDate,
) -> Vec<SavingsTransaction> {
    let start = goal.period_start();
    let end = goal.period_end().map_or(as_of, |end| end.min(as_of));

    transactions
        .iter()
        .filter(|t| match &t.goal_id {
            Some(goal_id) => *goal_id == goal.id,
            None => t.date >= start && t.date <= end,
        })
        .cloned()
        .collect()
}

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::{MONTHS_PER_YEAR, ONE_HUNDRED};
use crate::goals::{GoalSchedule, SavingsGoal};
use crate::savings::savings_model::MonthlySavingsDataPoint;
use crate::savings::trend::classify_trend;
use crate::settings::SavingsConfig;
use crate::transactions::SavingsTransaction;
use crate::utils::time_utils::{get_months_between, month_label, month_start, whole_months_between};

/// Share of `goal` that should be saved in a single month.
///
/// One-time goals spread the target over the whole months between start and
/// deadline, or expect the full target in one month when that span is empty
/// or the deadline is unknown.
pub fn monthly_goal_amount(goal: &SavingsGoal) -> Decimal {
    match &goal.schedule {
        GoalSchedule::RecurringMonthly {
            recurring_amount, ..
        } => *recurring_amount,
        GoalSchedule::RecurringYearly {
            recurring_amount, ..
        } => *recurring_amount / MONTHS_PER_YEAR,
        GoalSchedule::OneTime { period_end, .. } => {
            let months = period_end
                .map(|end| whole_months_between(goal.period_start(), end))
                .unwrap_or(0);
            if months > 0 {
                goal.target_amount / Decimal::from(months)
            } else {
                goal.target_amount
            }
        }
    }
}

/// Buckets `transactions` into one point per calendar month.
///
/// Points run from the earliest to the latest transaction month in
/// chronological order; months without transactions are emitted with a zero
/// amount so the series has no gaps. Each point's trend compares it with the
/// previous point, and the first point with zero.
pub fn build_monthly_series(
    transactions: &[SavingsTransaction],
    goal: &SavingsGoal,
    config: &SavingsConfig,
) -> Vec<MonthlySavingsDataPoint> {
    let mut by_month: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for transaction in transactions {
        *by_month
            .entry(month_start(transaction.date))
            .or_insert(Decimal::ZERO) += transaction.deposit();
    }

    let (first, last) = match (by_month.keys().next(), by_month.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Vec::new(),
    };

    let monthly_goal = monthly_goal_amount(goal);
    let mut previous_amount = Decimal::ZERO;
    let series: Vec<MonthlySavingsDataPoint> = get_months_between(first, last)
        .into_iter()
        .map(|month| {
            let amount = by_month.get(&month).copied().unwrap_or(Decimal::ZERO);
            let percentage_of_goal = if monthly_goal > Decimal::ZERO {
                amount
                    .checked_div(monthly_goal)
                    .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
                    .unwrap_or(Decimal::MAX)
            } else {
                Decimal::ZERO
            };
            let trend = classify_trend(amount, previous_amount, config);
            previous_amount = amount;

            MonthlySavingsDataPoint {
                month: month_label(month).to_string(),
                month_start: month,
                amount,
                monthly_goal,
                percentage_of_goal,
                trend,
                is_negative: amount < Decimal::ZERO,
            }
        })
        .collect();

    debug!(
        "Built {} monthly points for goal {} from {} transactions",
        series.len(),
        goal.id,
        transactions.len()
    );
    series
}

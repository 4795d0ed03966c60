//! Portfolio-level metrics across several goals.
//!
//! Unlike the per-goal calculators this never fails: goals with incomplete
//! data are left out of the totals and reported in `excluded_goal_ids`.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::Error;
use crate::goals::{GoalSchedule, SavingsGoal};
use crate::savings::expected_progress::expected_progress;
use crate::savings::savings_model::SavingsMetrics;

/// (year total, average monthly savings) a goal contributes.
fn yearly_and_monthly(goal: &SavingsGoal) -> (Decimal, Decimal) {
    match &goal.schedule {
        GoalSchedule::OneTime { .. } => (goal.target_amount, goal.target_amount / MONTHS_PER_YEAR),
        GoalSchedule::RecurringMonthly {
            recurring_amount, ..
        } => (recurring_amount.saturating_mul(MONTHS_PER_YEAR), *recurring_amount),
        GoalSchedule::RecurringYearly {
            recurring_amount, ..
        } => (*recurring_amount, *recurring_amount / MONTHS_PER_YEAR),
    }
}

/// Active goals on `today`.
pub fn active_goals(goals: &[SavingsGoal], today: NaiveDate) -> Vec<&SavingsGoal> {
    goals.iter().filter(|goal| goal.is_active(today)).collect()
}

/// Combines the active goals in `goals` into one metric set as of `as_of`.
///
/// Each goal is weighted by its nominal size (target for one-time goals,
/// recurring amount otherwise) when averaging the stored progress.
pub fn aggregate_metrics(goals: &[SavingsGoal], as_of: NaiveDate) -> SavingsMetrics {
    let mut metrics = SavingsMetrics::default();
    let mut weighted_progress = Decimal::ZERO;
    let mut total_weight = Decimal::ZERO;

    for goal in active_goals(goals, as_of) {
        metrics.active_goal_count += 1;

        let expected = goal
            .validate()
            .map_err(Error::from)
            .and_then(|_| expected_progress(goal, as_of));
        let expected = match expected {
            Ok(expected) => expected,
            Err(e) => {
                warn!("Excluding goal {} from savings metrics: {}", goal.id, e);
                metrics.excluded_goal_ids.push(goal.id.clone());
                continue;
            }
        };

        let weight = goal.weight();
        weighted_progress = weighted_progress.saturating_add(weight.saturating_mul(goal.progress));
        total_weight = total_weight.saturating_add(weight);

        let (year_total, monthly) = yearly_and_monthly(goal);
        metrics.year_total = metrics.year_total.saturating_add(year_total);
        metrics.average_monthly_savings = metrics.average_monthly_savings.saturating_add(monthly);
        metrics.expected_amount = metrics
            .expected_amount
            .saturating_add(expected.max(Decimal::ZERO));
    }

    metrics.goal_progress = if total_weight > Decimal::ZERO {
        weighted_progress / total_weight
    } else {
        Decimal::ZERO
    };

    debug!(
        "Aggregated {} active goals ({} excluded): progress {}",
        metrics.active_goal_count,
        metrics.excluded_goal_ids.len(),
        metrics.goal_progress
    );
    metrics
}

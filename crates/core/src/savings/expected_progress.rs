use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{GoalStateError, Result};
use crate::goals::{GoalSchedule, SavingsGoal};
use crate::utils::time_utils::{days_between, whole_months_between};

/// Amount that should have been saved toward `goal` by `as_of`.
///
/// - One-time: the target interpolated linearly over the goal's days, held at
///   zero before the start and at the target after the deadline. Outside the
///   period this differs from the unclamped `target * elapsed / total`.
/// - Recurring monthly: recurring amount per whole month since the start.
/// - Recurring yearly: a twelfth of the recurring amount per whole month.
///
/// Recurring results are negative when `as_of` precedes the start; callers
/// treat that as "not started yet".
pub fn expected_progress(goal: &SavingsGoal, as_of: NaiveDate) -> Result<Decimal> {
    let expected = match &goal.schedule {
        GoalSchedule::OneTime { period_end, .. } => {
            let start = goal.period_start();
            let end = period_end.ok_or_else(|| GoalStateError::missing(&goal.id, "period_end"))?;
            let total_days = days_between(start, end);
            if total_days <= 0 {
                return Err(GoalStateError::NonPositiveSpan {
                    goal_id: goal.id.clone(),
                    start,
                    end,
                }
                .into());
            }
            let elapsed_days = days_between(start, as_of).clamp(0, total_days);
            let (elapsed, total) = (Decimal::from(elapsed_days), Decimal::from(total_days));
            goal.target_amount
                .checked_mul(elapsed)
                .map(|scaled| scaled / total)
                .unwrap_or_else(|| (goal.target_amount / total).saturating_mul(elapsed))
        }
        GoalSchedule::RecurringMonthly {
            recurring_amount,
            period_start,
            ..
        } => recurring_amount.saturating_mul(Decimal::from(whole_months_between(*period_start, as_of))),
        GoalSchedule::RecurringYearly {
            recurring_amount,
            period_start,
            ..
        } => {
            (*recurring_amount / MONTHS_PER_YEAR)
                .saturating_mul(Decimal::from(whole_months_between(*period_start, as_of)))
        }
    };

    debug!(
        "Expected progress for {} goal {} as of {}: {}",
        goal.kind(),
        goal.id,
        as_of,
        expected
    );
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target: Decimal, schedule: GoalSchedule) -> SavingsGoal {
        SavingsGoal {
            id: "g".to_string(),
            name: "Goal".to_string(),
            target_amount: target,
            schedule,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            progress: Decimal::ZERO,
        }
    }

    fn one_time(start: NaiveDate, end: Option<NaiveDate>) -> SavingsGoal {
        goal(
            dec!(1000),
            GoalSchedule::OneTime {
                period_start: Some(start),
                period_end: end,
            },
        )
    }

    #[test]
    fn test_one_time_interpolates_linearly() {
        // 2024-01-01 to 2024-01-11 is ten days.
        let g = one_time(date(2024, 1, 1), Some(date(2024, 1, 11)));
        assert_eq!(expected_progress(&g, date(2024, 1, 1)).unwrap(), dec!(0));
        assert_eq!(expected_progress(&g, date(2024, 1, 4)).unwrap(), dec!(300));
        assert_eq!(expected_progress(&g, date(2024, 1, 11)).unwrap(), dec!(1000));
    }

    #[test]
    fn test_one_time_clamps_outside_period() {
        let g = one_time(date(2024, 1, 1), Some(date(2024, 1, 11)));
        assert_eq!(expected_progress(&g, date(2023, 12, 1)).unwrap(), Decimal::ZERO);
        assert_eq!(expected_progress(&g, date(2024, 3, 1)).unwrap(), dec!(1000));
    }

    #[test]
    fn test_one_time_without_end_is_invalid() {
        let g = one_time(date(2024, 1, 1), None);
        let err = expected_progress(&g, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGoalState(GoalStateError::MissingField {
                field: "period_end",
                ..
            })
        ));
    }

    #[test]
    fn test_one_time_with_empty_span_is_invalid() {
        let g = one_time(date(2024, 5, 1), Some(date(2024, 4, 1)));
        let err = expected_progress(&g, date(2024, 5, 1)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGoalState(GoalStateError::NonPositiveSpan { .. })
        ));
    }

    #[test]
    fn test_recurring_monthly_counts_whole_months() {
        let g = goal(
            dec!(6000),
            GoalSchedule::RecurringMonthly {
                recurring_amount: dec!(500),
                period_start: date(2024, 1, 1),
                period_end: None,
            },
        );
        assert_eq!(expected_progress(&g, date(2024, 4, 1)).unwrap(), dec!(1500));
        assert_eq!(expected_progress(&g, date(2024, 1, 31)).unwrap(), dec!(0));
        assert_eq!(expected_progress(&g, date(2023, 11, 1)).unwrap(), dec!(-1000));
    }

    #[test]
    fn test_huge_one_time_target_does_not_overflow() {
        let g = goal(
            Decimal::MAX,
            GoalSchedule::OneTime {
                period_start: Some(date(2024, 1, 1)),
                period_end: Some(date(2024, 1, 11)),
            },
        );
        let at_deadline = expected_progress(&g, date(2024, 1, 11)).unwrap();
        assert!(at_deadline > Decimal::MAX / dec!(2));
        let halfway = expected_progress(&g, date(2024, 1, 6)).unwrap();
        assert!(halfway > Decimal::ZERO && halfway < at_deadline);
    }

    #[test]
    fn test_recurring_yearly_accrues_monthly() {
        let g = goal(
            dec!(1200),
            GoalSchedule::RecurringYearly {
                recurring_amount: dec!(1200),
                period_start: date(2024, 1, 15),
                period_end: None,
            },
        );
        assert_eq!(expected_progress(&g, date(2024, 7, 15)).unwrap(), dec!(600));
        assert_eq!(expected_progress(&g, date(2024, 7, 14)).unwrap(), dec!(500));
    }
}

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::ONE_HUNDRED;
use crate::errors::Result;
use crate::goals::{GoalSchedule, SavingsGoal};
use crate::savings::expected_progress::expected_progress;
use crate::savings::monthly_series::build_monthly_series;
use crate::savings::projection::recent_average_change;
use crate::savings::savings_model::{MonthlySavingsDataPoint, SavingsProgress};
use crate::settings::SavingsConfig;
use crate::transactions::{total_deposits, SavingsTransaction};
use crate::utils::time_utils::whole_months_between;

/// Progress of `goal` as of `as_of`, counting every supplied transaction.
///
/// The caller scopes `transactions` to the goal beforehand (see
/// [`crate::transactions::transactions_for_goal`]). Fails when the goal's
/// expected progress cannot be computed.
pub fn calculate_progress(
    goal: &SavingsGoal,
    transactions: &[SavingsTransaction],
    as_of: NaiveDate,
    config: &SavingsConfig,
) -> Result<SavingsProgress> {
    let series = build_monthly_series(transactions, goal, config);
    progress_from_series(goal, transactions, &series, as_of, config)
}

/// Same as [`calculate_progress`], reusing a series already built from the
/// same transactions.
pub fn progress_from_series(
    goal: &SavingsGoal,
    transactions: &[SavingsTransaction],
    series: &[MonthlySavingsDataPoint],
    as_of: NaiveDate,
    config: &SavingsConfig,
) -> Result<SavingsProgress> {
    let expected_amount = expected_progress(goal, as_of)?;
    let current_amount = total_deposits(transactions);

    // Saturates when a tiny expectation meets a large balance.
    let percentage = if expected_amount > Decimal::ZERO {
        current_amount
            .checked_div(expected_amount)
            .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };

    let projected_end_amount = match goal.schedule {
        GoalSchedule::OneTime {
            period_end: Some(end),
            ..
        } => recent_average_change(series, config).map(|average_change| {
            let months_remaining = whole_months_between(as_of, end).max(0);
            current_amount.saturating_add(average_change.saturating_mul(Decimal::from(months_remaining)))
        }),
        _ => None,
    };

    debug!(
        "Goal {} progress as of {}: {} of {} ({}%)",
        goal.id, as_of, current_amount, expected_amount, percentage
    );

    Ok(SavingsProgress {
        current_amount,
        expected_amount,
        percentage,
        is_on_track: percentage >= config.on_track_threshold,
        projected_end_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, GoalStateError};
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

    fn tx(y: i32, m: u32, d: u32, amount: Decimal) -> SavingsTransaction {
        SavingsTransaction::new(date(y, m, d), amount)
    }

    fn monthly_500() -> SavingsGoal {
        goal(
            dec!(6000),
            GoalSchedule::RecurringMonthly {
                recurring_amount: dec!(500),
                period_start: date(2024, 1, 1),
                period_end: None,
            },
        )
    }

    #[test]
    fn test_recurring_monthly_on_track() {
        let txs = vec![
            tx(2024, 1, 15, dec!(-400)),
            tx(2024, 2, 15, dec!(-600)),
            tx(2024, 3, 15, dec!(-500)),
        ];
        let progress =
            calculate_progress(&monthly_500(), &txs, date(2024, 4, 1), &SavingsConfig::default())
                .unwrap();

        assert_eq!(progress.expected_amount, dec!(1500));
        assert_eq!(progress.current_amount, dec!(1500));
        assert_eq!(progress.percentage, dec!(100));
        assert!(progress.is_on_track);
        assert_eq!(progress.projected_end_amount, None);
    }

    #[test]
    fn test_behind_schedule_is_not_on_track() {
        let txs = vec![tx(2024, 1, 15, dec!(-800)), tx(2024, 2, 15, dec!(-500))];
        let progress =
            calculate_progress(&monthly_500(), &txs, date(2024, 4, 1), &SavingsConfig::default())
                .unwrap();

        assert!(progress.percentage < dec!(90));
        assert!(!progress.is_on_track);
    }

    #[test]
    fn test_on_track_threshold_is_inclusive() {
        let txs = vec![tx(2024, 1, 15, dec!(1350))];
        let progress =
            calculate_progress(&monthly_500(), &txs, date(2024, 4, 1), &SavingsConfig::default())
                .unwrap();
        assert_eq!(progress.percentage, dec!(90));
        assert!(progress.is_on_track);
    }

    #[test]
    fn test_zero_expected_yields_zero_percentage() {
        let progress =
            calculate_progress(&monthly_500(), &[], date(2024, 1, 20), &SavingsConfig::default())
                .unwrap();
        assert_eq!(progress.expected_amount, Decimal::ZERO);
        assert_eq!(progress.percentage, Decimal::ZERO);
        assert!(!progress.is_on_track);

        // Not started yet: expected is negative.
        let progress = calculate_progress(
            &monthly_500(),
            &[tx(2023, 12, 1, dec!(100))],
            date(2023, 11, 1),
            &SavingsConfig::default(),
        )
        .unwrap();
        assert_eq!(progress.percentage, Decimal::ZERO);
    }

    #[test]
    fn test_one_time_projects_end_amount() {
        let one_time = goal(
            dec!(3000),
            GoalSchedule::OneTime {
                period_start: Some(date(2024, 1, 1)),
                period_end: Some(date(2024, 12, 1)),
            },
        );
        let txs = vec![
            tx(2024, 1, 10, dec!(-200)),
            tx(2024, 2, 10, dec!(-250)),
            tx(2024, 3, 10, dec!(-300)),
        ];
        let progress =
            calculate_progress(&one_time, &txs, date(2024, 4, 1), &SavingsConfig::default())
                .unwrap();

        // 750 saved, +50 per month for the 8 whole months left.
        assert_eq!(progress.current_amount, dec!(750));
        assert_eq!(progress.projected_end_amount, Some(dec!(1150)));
    }

    #[test]
    fn test_one_time_past_deadline_projects_current_total() {
        let one_time = goal(
            dec!(3000),
            GoalSchedule::OneTime {
                period_start: Some(date(2024, 1, 1)),
                period_end: Some(date(2024, 4, 1)),
            },
        );
        let txs = vec![
            tx(2024, 1, 10, dec!(-200)),
            tx(2024, 2, 10, dec!(-250)),
            tx(2024, 3, 10, dec!(-300)),
        ];
        let progress =
            calculate_progress(&one_time, &txs, date(2024, 6, 1), &SavingsConfig::default())
                .unwrap();
        assert_eq!(progress.projected_end_amount, Some(dec!(750)));
        assert_eq!(progress.expected_amount, dec!(3000));
        assert_eq!(progress.percentage, dec!(25));
    }

    #[test]
    fn test_one_time_with_short_history_has_no_projection() {
        let one_time = goal(
            dec!(3000),
            GoalSchedule::OneTime {
                period_start: Some(date(2024, 1, 1)),
                period_end: Some(date(2024, 12, 1)),
            },
        );
        let txs = vec![tx(2024, 2, 10, dec!(-250)), tx(2024, 3, 10, dec!(-300))];
        let progress =
            calculate_progress(&one_time, &txs, date(2024, 4, 1), &SavingsConfig::default())
                .unwrap();
        assert_eq!(progress.projected_end_amount, None);
    }

    #[test]
    fn test_invalid_goal_propagates() {
        let one_time = goal(
            dec!(3000),
            GoalSchedule::OneTime {
                period_start: Some(date(2024, 1, 1)),
                period_end: None,
            },
        );
        let err = calculate_progress(&one_time, &[], date(2024, 4, 1), &SavingsConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGoalState(GoalStateError::MissingField { .. })
        ));
    }

    #[test]
    fn test_tiny_expectation_saturates_percentage() {
        let tiny = goal(
            dec!(1),
            GoalSchedule::RecurringMonthly {
                recurring_amount: Decimal::new(1, 28),
                period_start: date(2024, 1, 1),
                period_end: None,
            },
        );
        let txs = vec![tx(2024, 1, 15, dec!(-1000000))];
        let progress =
            calculate_progress(&tiny, &txs, date(2024, 2, 1), &SavingsConfig::default()).unwrap();

        assert_eq!(progress.expected_amount, Decimal::new(1, 28));
        assert_eq!(progress.percentage, Decimal::MAX);
        assert!(progress.is_on_track);
    }

    #[test]
    fn test_transactions_are_not_date_filtered() {
        let txs = vec![tx(2020, 1, 1, dec!(-1500))];
        let progress =
            calculate_progress(&monthly_500(), &txs, date(2024, 4, 1), &SavingsConfig::default())
                .unwrap();
        assert_eq!(progress.current_amount, dec!(1500));
    }
}

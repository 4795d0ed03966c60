use log::debug;
use rust_decimal::Decimal;

use crate::constants::PROJECTION_AVERAGE_WINDOW;
use crate::savings::savings_model::{MonthlySavingsDataPoint, SavingsProjection};
use crate::settings::SavingsConfig;
use crate::utils::time_utils::{add_months, label_after};

/// Average month-over-month change across the last three points, or `None`
/// while the series is shorter than `min_months_for_projection`.
///
/// A shorter configured minimum averages whatever points there are.
pub fn recent_average_change(
    series: &[MonthlySavingsDataPoint],
    config: &SavingsConfig,
) -> Option<Decimal> {
    let window = PROJECTION_AVERAGE_WINDOW.min(series.len());
    if window < 2 || series.len() < config.min_months_for_projection {
        return None;
    }
    let recent = &series[series.len() - window..];
    let total_change = recent.windows(2).fold(Decimal::ZERO, |total, pair| {
        total.saturating_add(pair[1].amount.saturating_sub(pair[0].amount))
    });
    Some(total_change / Decimal::from(window - 1))
}

/// Extrapolates `months_ahead` future months from the recent trend.
///
/// Returns an empty list when the history is too short; that is the normal
/// state of a new goal, not an error. Confidence drops by the configured decay
/// for every month projected and stays within [0, 1].
pub fn project_savings(
    series: &[MonthlySavingsDataPoint],
    months_ahead: usize,
    config: &SavingsConfig,
) -> Vec<SavingsProjection> {
    let (Some(average_change), Some(last)) = (recent_average_change(series, config), series.last())
    else {
        debug!(
            "Skipping projection: {} monthly points, {} required",
            series.len(),
            config.min_months_for_projection
        );
        return Vec::new();
    };

    (1..=months_ahead)
        .map(|step| {
            let step_decimal = Decimal::from(step);
            let confidence = Decimal::ONE
                .saturating_sub(step_decimal.saturating_mul(config.confidence_decay))
                .clamp(Decimal::ZERO, Decimal::ONE);
            SavingsProjection {
                month: label_after(&last.month, step).to_string(),
                month_start: add_months(last.month_start, step as u32).unwrap_or(last.month_start),
                projected_amount: last
                    .amount
                    .saturating_add(average_change.saturating_mul(step_decimal)),
                confidence_score: confidence,
            }
        })
        .collect()
}

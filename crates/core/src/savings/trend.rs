use rust_decimal::Decimal;

use crate::savings::savings_model::TrendIndicator;
use crate::settings::SavingsConfig;

/// Classifies the change from `previous` to `current`.
///
/// Changes strictly smaller than the configured threshold are stable.
pub fn classify_trend(current: Decimal, previous: Decimal, config: &SavingsConfig) -> TrendIndicator {
    if (current - previous).abs() < config.trend_threshold {
        TrendIndicator::Stable
    } else if current > previous {
        TrendIndicator::Up
    } else {
        TrendIndicator::Down
    }
}

//! Savings engine output models.
//!
//! Everything here is derived data: plain, serializable, and never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::SavingsGoal;

/// Direction of month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendIndicator {
    Up,
    Down,
    Stable,
}

/// One calendar month of aggregated savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySavingsDataPoint {
    /// Short month label ("Jan")
    pub month: String,
    /// First day of the month
    pub month_start: NaiveDate,
    /// Sum of deposits in the month (never negative)
    pub amount: Decimal,
    /// Share of the goal expected per month
    pub monthly_goal: Decimal,
    pub percentage_of_goal: Decimal,
    /// Change against the previous point (the first point compares to zero)
    pub trend: TrendIndicator,
    /// Reserved. Amounts are normalized before this is computed, so it is always false.
    pub is_negative: bool,
}

/// Forward-looking estimate for a single month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsProjection {
    pub month: String,
    pub month_start: NaiveDate,
    pub projected_amount: Decimal,
    /// In [0, 1], non-increasing with distance
    pub confidence_score: Decimal,
}

/// Progress snapshot of a single goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsProgress {
    pub current_amount: Decimal,
    /// What should have accumulated by the as-of date
    pub expected_amount: Decimal,
    /// current / expected * 100, or 0 when nothing is expected yet
    pub percentage: Decimal,
    pub is_on_track: bool,
    /// Only for one-time goals with a deadline and enough history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_end_amount: Option<Decimal>,
}

/// Portfolio-level metrics across active goals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsMetrics {
    /// Weighted average of the goals' stored progress
    pub goal_progress: Decimal,
    pub year_total: Decimal,
    pub average_monthly_savings: Decimal,
    /// Sum of expected progress as of the aggregation date
    pub expected_amount: Decimal,
    pub active_goal_count: usize,
    /// Active goals left out because their data is incomplete
    pub excluded_goal_ids: Vec<String>,
}

/// Everything the savings views need for one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub goal: SavingsGoal,
    pub progress: SavingsProgress,
    pub monthly_series: Vec<MonthlySavingsDataPoint>,
    pub projections: Vec<SavingsProjection>,
}

/// Overviews of all active goals, with combined metrics when several are active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub as_of: NaiveDate,
    pub goals: Vec<GoalOverview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<SavingsMetrics>,
}

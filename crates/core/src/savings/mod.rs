//! Savings module - goal progress, monthly series, projections, and
//! portfolio metrics.
//!
//! Every calculator is a pure function of its inputs and the
//! [`SavingsConfig`](crate::settings::SavingsConfig) it is given. The per-goal
//! calculators fail on incomplete goals; the portfolio aggregator skips them.

mod expected_progress;
mod metrics;
mod monthly_series;
mod progress;
mod projection;
mod savings_model;
mod savings_service;
mod savings_traits;
mod trend;

pub use expected_progress::expected_progress;
pub use metrics::{active_goals, aggregate_metrics};
pub use monthly_series::{build_monthly_series, monthly_goal_amount};
pub use progress::{calculate_progress, progress_from_series};
pub use projection::{project_savings, recent_average_change};
pub use savings_model::*;
pub use savings_service::SavingsService;
pub use savings_traits::{SavingsRepositoryTrait, SavingsServiceTrait};
pub use trend::classify_trend;
